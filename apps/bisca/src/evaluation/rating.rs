//! Post-hoc quality rating of single moves.

use serde::Serialize;

use crate::domain::{Card, Suit};

pub const BASE_RATING: i32 = 5;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

impl GamePhase {
    /// Phase from round progress in [0, 1].
    pub fn from_progress(progress: f64) -> Self {
        if progress < 0.33 {
            GamePhase::Early
        } else if progress < 0.66 {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }
}

/// Facts about one move once the round is resolved.
#[derive(Debug, Clone, Copy)]
pub struct MoveFacts {
    pub card: Card,
    pub trump: Suit,
    pub led_suit: Suit,
    pub is_leader: bool,
    pub phase: GamePhase,
    /// This card took the round.
    pub won: bool,
    /// The mover's team took the round.
    pub team_won: bool,
    /// No weaker card of the same suit would still have taken the round.
    pub cheapest_win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub value: u8,
    pub reasoning: String,
}

/// Rate a move 1..=10 from the heuristics it triggers.
pub fn rate_move(f: &MoveFacts) -> Rating {
    let mut score = BASE_RATING;
    let mut clauses: Vec<&'static str> = Vec::new();
    let is_trump = f.card.suit == f.trump;
    let high = f.card.is_high_value();
    let points = f.card.points();

    if f.is_leader {
        if is_trump && high {
            match f.phase {
                GamePhase::Early => {
                    score -= 2;
                    clauses.push("exposed a top trump early");
                }
                GamePhase::Late => {
                    score += 2;
                    clauses.push("cashed a top trump late");
                }
                GamePhase::Mid => {}
            }
        } else if points == 0 && !is_trump {
            score += 1;
            clauses.push("safe low lead");
        }
    } else {
        if f.card.suit == f.led_suit {
            score += 1;
            clauses.push("followed suit");
        } else if is_trump && f.won {
            score += 1;
            clauses.push("trumped in");
        }
        if f.won && f.cheapest_win {
            score += 3;
            clauses.push("won cheaply");
        } else if f.won {
            score += 1;
            clauses.push("took the round");
        }
        if is_trump && !f.won && !f.team_won {
            score -= 2;
            clauses.push("wasted a trump");
        }
        if f.team_won && !f.won && points > 0 {
            score += 1;
            clauses.push("fed points to partner");
        }
    }

    if high && !f.team_won {
        score -= 3;
        clauses.push("high-value card lost");
    }
    if f.is_leader && f.won {
        score += 1;
        clauses.push("lead held");
    }

    let value = score.clamp(i32::from(MIN_RATING), i32::from(MAX_RATING)) as u8;
    let reasoning = if clauses.is_empty() {
        String::from("routine play")
    } else {
        clauses.join("; ")
    };
    Rating { value, reasoning }
}
