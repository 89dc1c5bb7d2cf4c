//! Difficulty tiers and the tuning they carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    /// Re-selects its personality every round.
    Adaptive,
}

/// Numeric knobs of a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Multiplier on the capture risk of candidate leads.
    pub risk_aversion: f64,
    /// Half-width of the uniform jitter added to every candidate score.
    pub randomness: f64,
    /// Share of rounds the engine aims to win; above it, it may concede.
    pub target_win_rate: f64,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Adaptive,
    ];

    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                risk_aversion: 0.3,
                randomness: 4.0,
                target_win_rate: 0.35,
            },
            Difficulty::Medium => DifficultyProfile {
                risk_aversion: 0.6,
                randomness: 2.0,
                target_win_rate: 0.5,
            },
            Difficulty::Hard => DifficultyProfile {
                risk_aversion: 0.9,
                randomness: 1.0,
                target_win_rate: 0.65,
            },
            Difficulty::VeryHard => DifficultyProfile {
                risk_aversion: 1.2,
                randomness: 0.3,
                target_win_rate: 0.8,
            },
            Difficulty::Adaptive => DifficultyProfile {
                risk_aversion: 1.0,
                randomness: 0.8,
                target_win_rate: 0.6,
            },
        }
    }

    pub const fn is_adaptive(self) -> bool {
        matches!(self, Difficulty::Adaptive)
    }

    /// Deception estimates and trait evolution run only at the top tier.
    pub const fn is_top_tier(self) -> bool {
        matches!(self, Difficulty::VeryHard)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
            Difficulty::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "veryhard" => Ok(Difficulty::VeryHard),
            "adaptive" => Ok(Difficulty::Adaptive),
            _ => Err(format!("unknown difficulty: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_tiers_are_less_random() {
        let easy = Difficulty::Easy.profile();
        let very_hard = Difficulty::VeryHard.profile();
        assert!(easy.randomness > very_hard.randomness);
        assert!(easy.risk_aversion < very_hard.risk_aversion);
        assert!(easy.target_win_rate < very_hard.target_win_rate);
    }

    #[test]
    fn parses_loose_names() {
        assert_eq!("very-hard".parse(), Ok(Difficulty::VeryHard));
        assert_eq!("Very_Hard".parse(), Ok(Difficulty::VeryHard));
        assert_eq!("adaptive".parse(), Ok(Difficulty::Adaptive));
        assert!("impossible".parse::<Difficulty>().is_err());
        for d in Difficulty::ALL {
            assert_eq!(d.as_str().parse(), Ok(d));
        }
        assert_eq!(serde_json::to_string(&Difficulty::VeryHard).unwrap(), "\"very_hard\"");
    }
}
