//! Long-term opponent profile spanning many matches.

use serde::{Deserialize, Serialize};

use crate::ai::memory::OpponentMemory;

pub const SNAPSHOT_CAPACITY: usize = 10;

/// Behaviour metrics as they stood at the end of one match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSnapshot {
    pub saves_trumps: f64,
    pub plays_aggressively: f64,
    pub avoids_risk: f64,
    pub predictability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayStyleTendencies {
    /// Leads per suit, indexed like `Suit::ALL`.
    pub preferred_suits: [u32; 4],
    /// Running share of high-value plays.
    pub value_preference: f64,
    pub trump_usage_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub games_played: u32,
    pub wins: u32,
    pub average_score: f64,
    pub snapshots: Vec<BehaviorSnapshot>,
    pub tendencies: PlayStyleTendencies,
}

impl OpponentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished match into the profile.
    pub fn record_match(&mut self, memory: &OpponentMemory, final_score: i16, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
        let n = f64::from(self.games_played);
        self.average_score += (f64::from(final_score) - self.average_score) / n;

        let metrics = memory.metrics();
        self.snapshots.push(BehaviorSnapshot {
            saves_trumps: metrics.saves_trumps,
            plays_aggressively: metrics.plays_aggressively,
            avoids_risk: metrics.avoids_risk,
            predictability: memory.predictability(),
        });
        if self.snapshots.len() > SNAPSHOT_CAPACITY {
            let excess = self.snapshots.len() - SNAPSHOT_CAPACITY;
            self.snapshots.drain(..excess);
        }

        let stats = memory.stats();
        for (total, seen) in self.tendencies.preferred_suits.iter_mut().zip(stats.suit_leads) {
            *total += seen;
        }
        if stats.actions > 0 {
            let actions = f64::from(stats.actions);
            let value = f64::from(stats.high_value_plays) / actions;
            let trumps = f64::from(stats.trumps_played) / actions;
            self.tendencies.value_preference += (value - self.tendencies.value_preference) / n;
            self.tendencies.trump_usage_rate += (trumps - self.tendencies.trump_usage_rate) / n;
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_average_and_snapshot_cap() {
        let memory = OpponentMemory::default();
        let mut profile = OpponentProfile::new();
        profile.record_match(&memory, 70, true);
        profile.record_match(&memory, 50, false);
        assert_eq!(profile.games_played, 2);
        assert_eq!(profile.wins, 1);
        assert!((profile.average_score - 60.0).abs() < 1e-9);
        assert!((profile.win_rate() - 0.5).abs() < 1e-9);

        for _ in 0..20 {
            profile.record_match(&memory, 60, false);
        }
        assert_eq!(profile.snapshots.len(), SNAPSHOT_CAPACITY);
    }

    #[test]
    fn serializes_to_json() {
        let mut profile = OpponentProfile::new();
        profile.record_match(&OpponentMemory::default(), 61, true);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["games_played"], 1);
        let back: OpponentProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
