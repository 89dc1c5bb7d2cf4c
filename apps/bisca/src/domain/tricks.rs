//! Round winner resolution.
//!
//! Two cards are compared with a fixed rule ladder. Larger tables reduce each
//! team to a representative card first and then compare the two
//! representatives with the same ladder. Within a round only trump and the
//! led suit can take it, so representatives are chosen relative to the lead.

use crate::domain::state::TeamId;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairWinner {
    First,
    Second,
}

/// Which rule of the ladder decided a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// Ace of trump against Seven of trump. Always agrees with `HigherRank`
    /// under the current rank table; kept as its own rule and reason.
    TrumpAceOverSeven,
    /// Same suit, higher rank.
    HigherRank,
    /// Exactly one of the cards is trump.
    Trump,
    /// Unrelated non-trump suits: the earlier card holds.
    FirstPlayed,
    /// The other team only discarded off-suit; the led suit holds.
    LedSuit,
}

impl WinReason {
    pub fn describe(self) -> &'static str {
        match self {
            WinReason::TrumpAceOverSeven => "ace of trump beats seven of trump",
            WinReason::HigherRank => "higher rank in the same suit",
            WinReason::Trump => "trump beats a non-trump card",
            WinReason::FirstPlayed => "different suits without trump, first card holds",
            WinReason::LedSuit => "led suit holds over off-suit discards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub winner: PairWinner,
    pub reason: WinReason,
}

/// Resolve a two-card round; `first` was played before `second`.
pub fn resolve_pair(first: Card, second: Card, trump: Suit) -> PairOutcome {
    let first_trump = first.suit == trump;
    let second_trump = second.suit == trump;

    if first_trump && second_trump {
        match (first.rank, second.rank) {
            (Rank::Ace, Rank::Seven) => {
                return PairOutcome {
                    winner: PairWinner::First,
                    reason: WinReason::TrumpAceOverSeven,
                }
            }
            (Rank::Seven, Rank::Ace) => {
                return PairOutcome {
                    winner: PairWinner::Second,
                    reason: WinReason::TrumpAceOverSeven,
                }
            }
            _ => {}
        }
    }

    if first.suit == second.suit {
        let winner = if second.rank > first.rank {
            PairWinner::Second
        } else {
            PairWinner::First
        };
        return PairOutcome {
            winner,
            reason: WinReason::HigherRank,
        };
    }

    if first_trump != second_trump {
        let winner = if second_trump {
            PairWinner::Second
        } else {
            PairWinner::First
        };
        return PairOutcome {
            winner,
            reason: WinReason::Trump,
        };
    }

    PairOutcome {
        winner: PairWinner::First,
        reason: WinReason::FirstPlayed,
    }
}

/// Strength of `card` in a round led in `led`.
///
/// Trump outranks the led suit; a card of any other suit cannot take the
/// round and has no strength. Ordering the keys is transitive, unlike
/// pairwise comparisons in play order once off-suit discards are involved.
pub fn round_strength(card: Card, led: Suit, trump: Suit) -> Option<(u8, Rank)> {
    if card.suit == trump {
        Some((2, card.rank))
    } else if card.suit == led {
        Some((1, card.rank))
    } else {
        None
    }
}

/// Index (into `cards`) of the team's representative card.
///
/// `cards` is one team's contribution in play order. The representative is
/// its strongest card by `round_strength`; a team that only discarded is
/// represented by its first card, which cannot take the round.
pub fn team_representative(cards: &[Card], led: Suit, trump: Suit) -> Option<usize> {
    if cards.is_empty() {
        return None;
    }
    let strongest = cards
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| round_strength(c, led, trump).map(|s| (s, i)))
        .max()
        .map(|(_, i)| i);
    Some(strongest.unwrap_or(0))
}

/// Outcome of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Index into the play list of the winning card.
    pub winning_index: usize,
    pub winning_team: TeamId,
    pub reason: WinReason,
    /// Representative play index per team, in order of first appearance.
    pub representatives: Vec<(TeamId, usize)>,
}

/// Resolve a round from `(team, card)` plays in play order.
///
/// Exactly two teams must be present.
pub fn resolve_round(plays: &[(TeamId, Card)], trump: Suit) -> Result<TrickOutcome, DomainError> {
    let mut teams: Vec<TeamId> = Vec::with_capacity(2);
    for &(team, _) in plays {
        if !teams.contains(&team) {
            teams.push(team);
        }
    }
    let led = match plays.first() {
        Some(&(_, card)) => card.suit,
        None => return Err(DomainError::malformed(2, 0, "no plays")),
    };
    if teams.len() != 2 {
        return Err(DomainError::malformed(
            plays.len().max(2),
            plays.len(),
            format!("expected two teams, found {}", teams.len()),
        ));
    }

    let mut representatives = Vec::with_capacity(2);
    for &team in &teams {
        let indices: Vec<usize> = plays
            .iter()
            .enumerate()
            .filter(|(_, (t, _))| *t == team)
            .map(|(i, _)| i)
            .collect();
        let cards: Vec<Card> = indices.iter().map(|&i| plays[i].1).collect();
        let rep = team_representative(&cards, led, trump)
            .map(|local| indices[local])
            .ok_or_else(|| DomainError::malformed(plays.len(), plays.len(), "empty team"))?;
        representatives.push((team, rep));
    }

    let (a, b) = (representatives[0], representatives[1]);
    let (first, second) = if a.1 < b.1 { (a, b) } else { (b, a) };
    let (first_card, second_card) = (plays[first.1].1, plays[second.1].1);
    let contends = |card: Card| round_strength(card, led, trump).is_some();
    let uncontested = |card: Card| {
        if card.suit == trump {
            WinReason::Trump
        } else {
            WinReason::LedSuit
        }
    };
    let outcome = match (contends(first_card), contends(second_card)) {
        (true, false) => PairOutcome {
            winner: PairWinner::First,
            reason: uncontested(first_card),
        },
        (false, true) => PairOutcome {
            winner: PairWinner::Second,
            reason: uncontested(second_card),
        },
        _ => resolve_pair(first_card, second_card, trump),
    };
    let (winning_team, winning_index) = match outcome.winner {
        PairWinner::First => first,
        PairWinner::Second => second,
    };

    Ok(TrickOutcome {
        winning_index,
        winning_team,
        reason: outcome.reason,
        representatives,
    })
}
