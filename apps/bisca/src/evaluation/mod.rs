//! Round evaluator: winner, points, move ratings, rolling statistics.
//!
//! The evaluator is independent of the AI: it sees only the cards each seat
//! put down. `evaluate_round` never fails; a move set that does not fit the
//! match is resolved to the first team in play order and flagged as
//! `Resolution::Degraded`. `try_evaluate_round` rejects it instead.

pub mod analysis;
pub mod rating;
pub mod stats;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

pub use analysis::QualityBand;
use analysis::{overall_quality, round_analysis, AnalysisInput};
pub use rating::GamePhase;
use rating::{rate_move, MoveFacts};
use stats::PlayerStats;
pub use stats::StatsSummary;

use crate::domain::rules::{team_of, total_rounds_for};
use crate::domain::scoring::{first_round_bonus, round_points, FirstRoundBonus};
use crate::domain::state::{GameState, PlayerId, TeamId};
use crate::domain::tricks::{resolve_round, round_strength, WinReason};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// One seat's card in a round, as handed to the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerMove {
    pub player_id: PlayerId,
    pub card: Card,
    pub team_id: TeamId,
    /// Filled in on the way out, see [`RoundEvaluation::rated_moves`].
    pub move_quality: Option<u8>,
}

impl PlayerMove {
    pub fn new(player_id: PlayerId, card: Card, team_id: TeamId) -> Self {
        Self {
            player_id,
            card,
            team_id,
            move_quality: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRating {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub card: Card,
    pub rating: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Normal,
    /// The move set did not fit the match; the winner is a fallback.
    Degraded { detail: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundEvaluation {
    pub round_no: u16,
    pub winning_team: TeamId,
    pub winning_player_id: PlayerId,
    pub winning_card: Option<Card>,
    /// `None` when the winner is a degraded fallback.
    #[serde(skip)]
    pub reason: Option<WinReason>,
    pub points_earned: u16,
    #[serde(skip)]
    pub bonus: Option<FirstRoundBonus>,
    pub move_ratings: Vec<MoveRating>,
    pub overall_round_quality: f64,
    pub quality_band: QualityBand,
    pub round_analysis: String,
    pub resolution: Resolution,
}

impl RoundEvaluation {
    pub fn is_degraded(&self) -> bool {
        matches!(self.resolution, Resolution::Degraded { .. })
    }

    /// The input moves with `move_quality` filled in.
    pub fn rated_moves(&self) -> Vec<PlayerMove> {
        self.move_ratings
            .iter()
            .map(|r| PlayerMove {
                player_id: r.player_id,
                card: r.card,
                team_id: r.team_id,
                move_quality: Some(r.rating),
            })
            .collect()
    }
}

struct Winner {
    index: Option<usize>,
    team: TeamId,
    reason: Option<WinReason>,
}

/// Evaluates rounds for one match and keeps per-player statistics.
#[derive(Debug, Clone)]
pub struct RoundEvaluator {
    players: usize,
    trump: Suit,
    total_rounds: u16,
    next_round: u16,
    stats: HashMap<PlayerId, PlayerStats>,
}

impl RoundEvaluator {
    pub fn new(players: usize, trump: Suit) -> Result<Self, DomainError> {
        let total_rounds = total_rounds_for(players)?;
        Ok(Self {
            players,
            trump,
            total_rounds,
            next_round: 1,
            stats: HashMap::new(),
        })
    }

    /// Evaluator positioned at the state's current round.
    pub fn for_game(state: &GameState) -> Result<Self, DomainError> {
        let mut evaluator = Self::new(state.player_count(), state.trump)?;
        evaluator.total_rounds = state.total_rounds.max(1);
        evaluator.next_round = state.current_round.max(1);
        Ok(evaluator)
    }

    /// Number of the round the next evaluation is for.
    pub fn next_round(&self) -> u16 {
        self.next_round
    }

    pub fn set_round(&mut self, round_no: u16) {
        self.next_round = round_no.max(1);
    }

    pub fn player_count(&self) -> usize {
        self.players
    }

    /// Check that `moves` is one card per seat with consistent teams.
    pub fn validate(&self, moves: &[PlayerMove]) -> Result<(), DomainError> {
        if moves.len() != self.players {
            return Err(DomainError::malformed(
                self.players,
                moves.len(),
                "move count does not match player count",
            ));
        }
        let mut seen = vec![false; self.players];
        for m in moves {
            let slot = seen.get_mut(m.player_id as usize).ok_or_else(|| {
                DomainError::malformed(
                    self.players,
                    moves.len(),
                    format!("unknown player {}", m.player_id),
                )
            })?;
            if *slot {
                return Err(DomainError::malformed(
                    self.players,
                    moves.len(),
                    format!("player {} moved twice", m.player_id),
                ));
            }
            *slot = true;
            if m.team_id != team_of(m.player_id, self.players) {
                return Err(DomainError::malformed(
                    self.players,
                    moves.len(),
                    format!("player {} is not on team {}", m.player_id, m.team_id),
                ));
            }
        }
        Ok(())
    }

    /// Evaluate a well-formed round or reject it.
    pub fn try_evaluate_round(
        &mut self,
        moves: &[PlayerMove],
        round_stake: u16,
    ) -> Result<RoundEvaluation, DomainError> {
        self.validate(moves)?;
        let plays: Vec<(TeamId, Card)> = moves.iter().map(|m| (m.team_id, m.card)).collect();
        let outcome = resolve_round(&plays, self.trump)?;
        let winner = Winner {
            index: Some(outcome.winning_index),
            team: outcome.winning_team,
            reason: Some(outcome.reason),
        };
        Ok(self.finish(moves, round_stake, winner, Resolution::Normal))
    }

    /// Evaluate a round, degrading to the first team in play order when
    /// the move set is malformed.
    pub fn evaluate_round(&mut self, moves: &[PlayerMove], round_stake: u16) -> RoundEvaluation {
        let plays: Vec<(TeamId, Card)> = moves.iter().map(|m| (m.team_id, m.card)).collect();
        let checked = self
            .validate(moves)
            .and_then(|()| resolve_round(&plays, self.trump));
        match checked {
            Ok(outcome) => {
                let winner = Winner {
                    index: Some(outcome.winning_index),
                    team: outcome.winning_team,
                    reason: Some(outcome.reason),
                };
                self.finish(moves, round_stake, winner, Resolution::Normal)
            }
            Err(err) => {
                warn!(round = self.next_round, error = %err, "malformed move set; defaulting winner");
                let winner = Winner {
                    index: (!moves.is_empty()).then_some(0),
                    team: moves.first().map_or(0, |m| m.team_id),
                    reason: None,
                };
                let detail = err.to_string();
                self.finish(moves, round_stake, winner, Resolution::Degraded { detail })
            }
        }
    }

    fn finish(
        &mut self,
        moves: &[PlayerMove],
        round_stake: u16,
        winner: Winner,
        resolution: Resolution,
    ) -> RoundEvaluation {
        let round_no = self.next_round;
        let cards: Vec<Card> = moves.iter().map(|m| m.card).collect();

        let bonus = winner.reason.and_then(|reason| {
            let team_cards: Vec<Card> = moves
                .iter()
                .filter(|m| m.team_id == winner.team)
                .map(|m| m.card)
                .collect();
            first_round_bonus(self.players, round_no, &cards, &team_cards, reason, self.trump)
        });
        let points_earned = round_points(&cards, round_stake) + bonus.map_or(0, FirstRoundBonus::points);

        let progress = f64::from(round_no.saturating_sub(1)) / f64::from(self.total_rounds.max(1));
        let phase = GamePhase::from_progress(progress.clamp(0.0, 1.0));
        let led_suit = moves.first().map_or(self.trump, |m| m.card.suit);

        let move_ratings: Vec<MoveRating> = moves
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let won = winner.index == Some(i);
                let rating = rate_move(&MoveFacts {
                    card: m.card,
                    trump: self.trump,
                    led_suit,
                    is_leader: i == 0,
                    phase,
                    won,
                    team_won: m.team_id == winner.team,
                    cheapest_win: won && lowest_winning_rank(&cards, i, self.trump),
                });
                MoveRating {
                    player_id: m.player_id,
                    team_id: m.team_id,
                    card: m.card,
                    rating: rating.value,
                    reasoning: rating.reasoning,
                }
            })
            .collect();

        for r in &move_ratings {
            self.stats
                .entry(r.player_id)
                .or_default()
                .record(r.rating, r.card.suit == self.trump);
        }

        let winning = winner.index.and_then(|i| moves.get(i));
        let winning_player_id = winning.map_or(0, |m| m.player_id);
        let winning_card = winning.map(|m| m.card);
        let overall_round_quality = overall_quality(&move_ratings);
        let quality_band = QualityBand::of(overall_round_quality);
        let reason_text = winner.reason.map_or("fallback", WinReason::describe);
        let round_analysis = round_analysis(&AnalysisInput {
            ratings: &move_ratings,
            winning_team: winner.team,
            winning_player: winning_player_id,
            winning_card,
            reason: reason_text,
            points: points_earned,
            quality: overall_round_quality,
            band: quality_band,
            degraded: matches!(resolution, Resolution::Degraded { .. }),
        });

        debug!(
            round = round_no,
            winning_team = winner.team,
            winning_player = winning_player_id,
            points = points_earned,
            quality = overall_round_quality,
            "round evaluated"
        );
        self.next_round = round_no.saturating_add(1);

        RoundEvaluation {
            round_no,
            winning_team: winner.team,
            winning_player_id,
            winning_card,
            reason: winner.reason,
            points_earned,
            bonus,
            move_ratings,
            overall_round_quality,
            quality_band,
            round_analysis,
            resolution,
        }
    }

    /// Rolling statistics of a player, `None` before their first move.
    pub fn get_stats(&self, player_id: PlayerId) -> Option<StatsSummary> {
        self.stats.get(&player_id).map(PlayerStats::summary)
    }
}

/// Whether `cards[index]` is the weakest card of its suit that still
/// outranks every other play of the round.
fn lowest_winning_rank(cards: &[Card], index: usize, trump: Suit) -> bool {
    let Some(&card) = cards.get(index) else {
        return false;
    };
    let led = cards.first().map_or(card.suit, |c| c.suit);
    let Some((class, rank)) = round_strength(card, led, trump) else {
        return false;
    };
    let best_other = cards
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .filter_map(|(_, &c)| round_strength(c, led, trump))
        .max();
    Rank::ALL
        .into_iter()
        .find(|&r| best_other.map_or(true, |b| (class, r) > b))
        == Some(rank)
}
