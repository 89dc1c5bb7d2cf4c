//! Rolling per-player move statistics.

use serde::Serialize;

pub const GOOD_MOVE: u8 = 7;
pub const BAD_MOVE: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub total_moves: u32,
    pub good_moves: u32,
    pub bad_moves: u32,
    pub rating_sum: u32,
    pub trumps_used: u32,
}

impl PlayerStats {
    pub fn record(&mut self, rating: u8, used_trump: bool) {
        self.total_moves += 1;
        self.rating_sum += u32::from(rating);
        if rating >= GOOD_MOVE {
            self.good_moves += 1;
        }
        if rating <= BAD_MOVE {
            self.bad_moves += 1;
        }
        if used_trump {
            self.trumps_used += 1;
        }
    }

    pub fn summary(&self) -> StatsSummary {
        let share = |n: u32| {
            if self.total_moves == 0 {
                0.0
            } else {
                f64::from(n) / f64::from(self.total_moves)
            }
        };
        StatsSummary {
            total_moves: self.total_moves,
            good_move_pct: share(self.good_moves) * 100.0,
            bad_move_pct: share(self.bad_moves) * 100.0,
            avg_rating: share(self.rating_sum),
            trump_usage_rate: share(self.trumps_used),
        }
    }
}

/// Display-ready view of a player's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_moves: u32,
    pub good_move_pct: f64,
    pub bad_move_pct: f64,
    pub avg_rating: f64,
    /// Fraction of moves that were trump, in [0, 1].
    pub trump_usage_rate: f64,
}
