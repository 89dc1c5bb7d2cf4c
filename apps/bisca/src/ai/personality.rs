//! Personalities as a strategy table.
//!
//! Each personality owns one adjustment function layered on top of the
//! engine's shared base heuristic. Adding a personality means adding a
//! variant and a table row.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::ai::recent_actions::Role;
use crate::domain::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Cautious,
    Aggressive,
    Analytical,
    Greedy,
    TrapSetter,
    Unpredictable,
}

/// What a personality gets to see about one candidate card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateView {
    pub card: Card,
    pub role: Role,
    pub is_trump: bool,
    /// Responding only: the card takes the round as things stand.
    pub wins_now: bool,
    /// Points on the table plus the carried stake.
    pub table_value: u16,
    /// Probability the card gets beaten, in [0, 1].
    pub capture_risk: f64,
    /// Round progress in [0, 1].
    pub progress: f64,
    pub trumps_in_hand: usize,
}

impl CandidateView {
    fn points(&self) -> f64 {
        f64::from(self.card.points())
    }
}

pub type Adjustment = fn(&CandidateView, &mut dyn RngCore) -> f64;

pub struct PersonalityStrategy {
    pub personality: Personality,
    pub description: &'static str,
    pub adjust: Adjustment,
}

static STRATEGIES: [PersonalityStrategy; 6] = [
    PersonalityStrategy {
        personality: Personality::Cautious,
        description: "avoids exposing points, wins with cheap cards",
        adjust: cautious,
    },
    PersonalityStrategy {
        personality: Personality::Aggressive,
        description: "leads strength and contests every round",
        adjust: aggressive,
    },
    PersonalityStrategy {
        personality: Personality::Analytical,
        description: "weighs captured value against measured risk",
        adjust: analytical,
    },
    PersonalityStrategy {
        personality: Personality::Greedy,
        description: "chases rounds with many points on the table",
        adjust: greedy,
    },
    PersonalityStrategy {
        personality: Personality::TrapSetter,
        description: "leads low to draw out high cards, holds top trumps",
        adjust: trap_setter,
    },
    PersonalityStrategy {
        personality: Personality::Unpredictable,
        description: "adds wide random noise to every choice",
        adjust: unpredictable,
    },
];

pub fn strategies() -> &'static [PersonalityStrategy] {
    &STRATEGIES
}

fn cautious(view: &CandidateView, _rng: &mut dyn RngCore) -> f64 {
    let mut adj = -4.0 * view.capture_risk;
    match view.role {
        Role::Leader => {
            if view.card.is_high_value() {
                adj -= 0.3 * view.points();
            } else if view.card.points() == 0 && !view.is_trump {
                adj += 2.0;
            }
        }
        Role::Responder => {
            if view.wins_now && view.card.points() <= 4 {
                adj += 2.0;
            }
        }
    }
    adj
}

fn aggressive(view: &CandidateView, _rng: &mut dyn RngCore) -> f64 {
    let mut adj = 0.0;
    match view.role {
        Role::Leader => adj += 0.3 * view.points(),
        Role::Responder if view.wins_now => adj += 3.0,
        Role::Responder => {}
    }
    if view.is_trump && view.table_value >= 5 {
        adj += 2.0;
    }
    adj
}

fn analytical(view: &CandidateView, _rng: &mut dyn RngCore) -> f64 {
    let mut adj = -2.0 * view.capture_risk;
    if view.role == Role::Responder && view.wins_now {
        adj += 0.2 * (f64::from(view.table_value) + view.points());
    }
    adj
}

fn greedy(view: &CandidateView, _rng: &mut dyn RngCore) -> f64 {
    match view.role {
        Role::Responder if view.wins_now => 0.5 * f64::from(view.table_value),
        Role::Responder => 0.0,
        Role::Leader => 0.2 * view.points() * (1.0 - view.capture_risk),
    }
}

fn trap_setter(view: &CandidateView, _rng: &mut dyn RngCore) -> f64 {
    let mut adj = 0.0;
    if view.role == Role::Leader && view.card.points() == 0 && !view.is_trump {
        adj += 3.0;
    }
    if view.is_trump && view.card.is_high_value() && view.table_value < 5 && view.progress < 0.66 {
        adj -= 3.0;
    }
    adj
}

fn unpredictable(_view: &CandidateView, rng: &mut dyn RngCore) -> f64 {
    rng.random_range(-3.0..3.0)
}

impl Personality {
    pub const ALL: [Personality; 6] = [
        Personality::Cautious,
        Personality::Aggressive,
        Personality::Analytical,
        Personality::Greedy,
        Personality::TrapSetter,
        Personality::Unpredictable,
    ];

    pub fn strategy(self) -> &'static PersonalityStrategy {
        // Rows are declared in variant order.
        &STRATEGIES[self as usize]
    }

    /// Score adjustment of this personality for one candidate.
    pub fn adjust(self, view: &CandidateView, rng: &mut dyn RngCore) -> f64 {
        (self.strategy().adjust)(view, rng)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Personality::Cautious => "cautious",
            Personality::Aggressive => "aggressive",
            Personality::Analytical => "analytical",
            Personality::Greedy => "greedy",
            Personality::TrapSetter => "trap_setter",
            Personality::Unpredictable => "unpredictable",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "cautious" => Ok(Personality::Cautious),
            "aggressive" => Ok(Personality::Aggressive),
            "analytical" => Ok(Personality::Analytical),
            "greedy" => Ok(Personality::Greedy),
            "trapsetter" => Ok(Personality::TrapSetter),
            "unpredictable" => Ok(Personality::Unpredictable),
            _ => Err(format!("unknown personality: {s}")),
        }
    }
}
