//! In-memory match simulator for AI training and evaluation.
//!
//! Runs complete matches with one AI per seat, applying plays and round
//! results through the domain's round flow and rating every round.

use bisca::ai::registry::by_name;
use bisca::ai::{AiConfig, AiEngine, AiError, AiPlayer, Personality, RandomPlayer};
use bisca::domain::round_flow::match_over;
use bisca::domain::rules::{team_of, DECK_POINTS};
use bisca::domain::{
    complete_round, deal_game, derive_dealing_seed, derive_engine_seed, play_card, table_plays,
    GameState, Seat,
};
use bisca::errors::DomainError;
use bisca::evaluation::{PlayerMove, RoundEvaluation, RoundEvaluator, StatsSummary};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::SeatSpec;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("unknown AI type: {0}")]
    UnknownAi(&'static str),
    #[error("seat {seat} failed to {action}: {source}")]
    Ai {
        seat: Seat,
        action: &'static str,
        #[source]
        source: AiError,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{played} card points played, expected {}", DECK_POINTS)]
    PointTotal { played: u16 },
    #[error("match ended with cards still in play")]
    Unfinished,
}

/// A personality change reported by a seat after a round.
#[derive(Debug, Clone, Copy)]
pub struct SwitchRecord {
    pub round_no: u16,
    pub seat: Seat,
    pub to: Personality,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Final scores indexed by seat.
    pub final_scores: Vec<i16>,
    /// Team totals; in a two-player match each seat is its own team.
    pub team_scores: [i16; 2],
    pub evaluations: Vec<RoundEvaluation>,
    /// Evaluator statistics indexed by seat.
    pub stats: Vec<Option<StatsSummary>>,
    pub switches: Vec<SwitchRecord>,
}

impl GameResult {
    /// `None` on a tie.
    pub fn winning_team(&self) -> Option<u8> {
        match self.team_scores[0].cmp(&self.team_scores[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Build the AI for one seat of one match.
pub fn build_seat(spec: SeatSpec, seed: u64) -> Result<Box<dyn AiPlayer + Send>, SimulatorError> {
    let (name, config) = match spec {
        SeatSpec::Random => (RandomPlayer::NAME, AiConfig::with_seed(seed)),
        SeatSpec::Engine {
            personality,
            difficulty,
        } => (
            AiEngine::NAME,
            AiConfig::with_seed(seed)
                .with_personality(personality)
                .with_difficulty(difficulty),
        ),
    };
    let factory = by_name(name).ok_or(SimulatorError::UnknownAi(name))?;
    Ok((factory.make)(&config))
}

/// In-memory match simulator.
pub struct Simulator {
    state: GameState,
    evaluator: RoundEvaluator,
    evaluations: Vec<RoundEvaluation>,
    switches: Vec<SwitchRecord>,
    raw_points: u16,
}

impl Simulator {
    /// Deal match `match_no` of a run seeded with `match_seed`.
    pub fn new(players: usize, match_seed: u64, match_no: u32) -> Result<Self, SimulatorError> {
        let state = deal_game(players, derive_dealing_seed(match_seed, match_no))?;
        let evaluator = RoundEvaluator::for_game(&state)?;
        Ok(Self {
            state,
            evaluator,
            evaluations: Vec::new(),
            switches: Vec::new(),
            raw_points: 0,
        })
    }

    /// Seats for this match, each engine seeded from the run seed.
    pub fn seats(
        specs: &[SeatSpec],
        match_seed: u64,
        match_no: u32,
    ) -> Result<Vec<Box<dyn AiPlayer + Send>>, SimulatorError> {
        specs
            .iter()
            .enumerate()
            .map(|(seat, &spec)| build_seat(spec, derive_engine_seed(match_seed, match_no, seat as u8)))
            .collect()
    }

    /// Play every round and return the result.
    pub fn simulate_game(
        mut self,
        ais: &mut [Box<dyn AiPlayer + Send>],
    ) -> Result<GameResult, SimulatorError> {
        let players = self.state.player_count();
        if ais.len() != players {
            return Err(DomainError::UnsupportedPlayerCount(ais.len()).into());
        }
        for (seat, ai) in ais.iter_mut().enumerate() {
            let seat = seat as Seat;
            ai.initialize(&self.state, seat)
                .map_err(|source| SimulatorError::Ai {
                    seat,
                    action: "initialize",
                    source,
                })?;
        }

        for _ in 0..self.state.total_rounds {
            self.play_round(ais)?;
        }

        if !match_over(&self.state) {
            return Err(SimulatorError::Unfinished);
        }
        if self.raw_points != DECK_POINTS {
            return Err(SimulatorError::PointTotal {
                played: self.raw_points,
            });
        }

        let final_scores: Vec<i16> = self.state.players.iter().map(|p| p.score).collect();
        let team_scores = [self.state.team_score(0), self.state.team_score(1)];
        let stats = (0..players)
            .map(|seat| self.evaluator.get_stats(seat as Seat))
            .collect();
        info!(?final_scores, ?team_scores, "match complete");

        Ok(GameResult {
            final_scores,
            team_scores,
            evaluations: self.evaluations,
            stats,
            switches: self.switches,
        })
    }

    fn play_round(&mut self, ais: &mut [Box<dyn AiPlayer + Send>]) -> Result<(), SimulatorError> {
        let players = self.state.player_count();
        for _ in 0..players {
            let seat = self.state.current_seat;
            let table = table_plays(&self.state);
            let ai = &mut ais[seat as usize];
            let index = if table.is_empty() {
                ai.choose_leading_card()
            } else {
                ai.choose_responding_card_on_table(&table)
            }
            .map_err(|source| SimulatorError::Ai {
                seat,
                action: "choose a card",
                source,
            })?;
            play_card(&mut self.state, seat, index)?;
        }

        let plays = table_plays(&self.state);
        self.raw_points += plays.iter().map(|(_, c)| u16::from(c.points())).sum::<u16>();
        let moves: Vec<PlayerMove> = plays
            .iter()
            .map(|&(seat, card)| PlayerMove::new(seat, card, team_of(seat, players)))
            .collect();
        let evaluation = self
            .evaluator
            .try_evaluate_round(&moves, self.state.round_stake)?;
        let record = complete_round(
            &mut self.state,
            Some(evaluation.winning_player_id),
            evaluation.points_earned,
        )?;
        debug!(
            round_no = record.round_no,
            winner = evaluation.winning_player_id,
            points = evaluation.points_earned,
            "round complete"
        );
        self.evaluations.push(evaluation);

        for (seat, ai) in ais.iter_mut().enumerate() {
            let seat = seat as Seat;
            ai.update_memory(&self.state)
                .map_err(|source| SimulatorError::Ai {
                    seat,
                    action: "update memory",
                    source,
                })?;
            if let Some(to) = ai.adapt_personality() {
                self.switches.push(SwitchRecord {
                    round_no: record.round_no,
                    seat,
                    to,
                });
            }
        }
        Ok(())
    }
}
