//! Shared types for the simulator.

use std::fmt;
use std::str::FromStr;

use bisca::ai::{Difficulty, Personality};
use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    /// Match result and per-seat totals only.
    Basic,
    /// Adds per-round metrics and personality switches.
    Detailed,
}

/// What sits at a seat: `random` or `<personality>:<difficulty>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatSpec {
    Random,
    Engine {
        personality: Personality,
        difficulty: Difficulty,
    },
}

impl FromStr for SeatSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            return Ok(SeatSpec::Random);
        }
        let (personality, difficulty) = s.split_once(':').unwrap_or((s, "medium"));
        Ok(SeatSpec::Engine {
            personality: personality.parse()?,
            difficulty: difficulty.parse()?,
        })
    }
}

impl fmt::Display for SeatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatSpec::Random => f.write_str("random"),
            SeatSpec::Engine {
                personality,
                difficulty,
            } => write!(f, "{personality}:{difficulty}"),
        }
    }
}
