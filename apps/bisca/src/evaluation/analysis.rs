//! Round quality banding and the textual round analysis.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::state::{PlayerId, TeamId};
use crate::domain::Card;
use crate::evaluation::MoveRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
}

impl QualityBand {
    pub fn of(quality: f64) -> Self {
        if quality >= 8.0 {
            QualityBand::Excellent
        } else if quality >= 6.0 {
            QualityBand::Good
        } else if quality >= 4.0 {
            QualityBand::Average
        } else {
            QualityBand::BelowAverage
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            QualityBand::Excellent => "excellent",
            QualityBand::Good => "good",
            QualityBand::Average => "average",
            QualityBand::BelowAverage => "below average",
        }
    }
}

/// Arithmetic mean of the move ratings; 0 for an empty round.
pub fn overall_quality(ratings: &[MoveRating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / ratings.len() as f64
}

pub(crate) struct AnalysisInput<'a> {
    pub ratings: &'a [MoveRating],
    pub winning_team: TeamId,
    pub winning_player: PlayerId,
    pub winning_card: Option<Card>,
    pub reason: &'a str,
    pub points: u16,
    pub quality: f64,
    pub band: QualityBand,
    pub degraded: bool,
}

pub(crate) fn round_analysis(input: &AnalysisInput<'_>) -> String {
    let mut out = String::new();
    let sequence: Vec<String> = input
        .ratings
        .iter()
        .map(|r| format!("P{} {}", r.player_id, r.card))
        .collect();
    let _ = write!(out, "Play: {}.", sequence.join(", "));

    let card = input
        .winning_card
        .map_or_else(|| String::from("-"), |c| c.to_string());
    let _ = write!(
        out,
        " Winner: team {}, player {} with {} ({}), {} points.",
        input.winning_team, input.winning_player, card, input.reason, input.points
    );
    if input.degraded {
        out.push_str(" Malformed move set, winner defaulted.");
    }

    // First maximum and first minimum, so ties favour the earlier play.
    let best = input
        .ratings
        .iter()
        .fold(None::<&MoveRating>, |b, r| match b {
            Some(b) if b.rating >= r.rating => Some(b),
            _ => Some(r),
        });
    let worst = input
        .ratings
        .iter()
        .fold(None::<&MoveRating>, |w, r| match w {
            Some(w) if w.rating <= r.rating => Some(w),
            _ => Some(r),
        });
    if let (Some(b), Some(w)) = (best, worst) {
        let _ = write!(
            out,
            " Best: P{} {} rated {} ({}). Worst: P{} {} rated {} ({}).",
            b.player_id, b.card, b.rating, b.reasoning, w.player_id, w.card, w.rating, w.reasoning
        );
    }
    let _ = write!(
        out,
        " Round quality: {:.1} ({}).",
        input.quality,
        input.band.as_str()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(QualityBand::of(8.0), QualityBand::Excellent);
        assert_eq!(QualityBand::of(7.9), QualityBand::Good);
        assert_eq!(QualityBand::of(6.0), QualityBand::Good);
        assert_eq!(QualityBand::of(4.0), QualityBand::Average);
        assert_eq!(QualityBand::of(3.99), QualityBand::BelowAverage);
        assert_eq!(QualityBand::BelowAverage.as_str(), "below average");
    }

    #[test]
    fn empty_round_has_zero_quality() {
        assert_eq!(overall_quality(&[]), 0.0);
    }
}
