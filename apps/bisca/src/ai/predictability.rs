//! Predictability scoring over the recent-actions buffer.
//!
//! Three measures, each in [0, 1]:
//! - pattern strength: how often consecutive leads repeat the suit,
//! - consistency: how reliably card value follows the stake level,
//! - situational variance: how much the average card value moves between
//!   stake levels.
//!
//! They combine as `0.4 * pattern + 0.4 * consistency + 0.2 * (1 - variance)`.

use crate::ai::pattern_store::StakeBucket;
use crate::ai::recent_actions::{ObservedAction, RecentActions, Role};

pub const MIN_ACTIONS: usize = 3;
const PATTERN_WEIGHT: f64 = 0.4;
const CONSISTENCY_WEIGHT: f64 = 0.4;
const VARIANCE_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictabilityBreakdown {
    pub pattern_strength: f64,
    pub consistency: f64,
    pub variance: f64,
    pub predictability: f64,
}

/// Share of consecutive leads that repeat the previous lead's suit.
pub fn pattern_strength(actions: &RecentActions) -> f64 {
    let leads: Vec<&ObservedAction> = actions
        .iter()
        .filter(|a| a.context.role == Role::Leader)
        .collect();
    if leads.len() < 2 {
        return 0.0;
    }
    let repeats = leads
        .windows(2)
        .filter(|w| w[0].card.suit == w[1].card.suit)
        .count();
    repeats as f64 / (leads.len() - 1) as f64
}

fn bucket_slot(stake: u16) -> usize {
    match StakeBucket::of(stake) {
        StakeBucket::Low => 0,
        StakeBucket::Medium => 1,
        StakeBucket::High => 2,
    }
}

/// Per stake bucket: (count, high-value plays, sum of normalized card value).
fn bucket_tallies(actions: &RecentActions) -> [(usize, usize, f64); 3] {
    let mut tallies = [(0usize, 0usize, 0.0f64); 3];
    for a in actions.iter() {
        let slot = &mut tallies[bucket_slot(a.context.stake)];
        slot.0 += 1;
        if a.card.is_high_value() {
            slot.1 += 1;
        }
        slot.2 += f64::from(a.card.points()) / 11.0;
    }
    tallies
}

/// Weighted majority share of the value choice within each stake bucket.
pub fn consistency(actions: &RecentActions) -> f64 {
    let total = actions.len();
    if total == 0 {
        return 0.0;
    }
    let agreeing: usize = bucket_tallies(actions)
        .iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|&(n, high, _)| high.max(n - high))
        .sum();
    agreeing as f64 / total as f64
}

/// Variance of the mean card value across the stake buckets seen, scaled to [0, 1].
pub fn situational_variance(actions: &RecentActions) -> f64 {
    let means: Vec<f64> = bucket_tallies(actions)
        .iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|&(n, _, sum)| sum / n as f64)
        .collect();
    if means.len() < 2 {
        return 0.0;
    }
    let avg = means.iter().sum::<f64>() / means.len() as f64;
    let var = means.iter().map(|m| (m - avg).powi(2)).sum::<f64>() / means.len() as f64;
    // Values live in [0, 1], so the variance never exceeds 0.25.
    (var * 4.0).clamp(0.0, 1.0)
}

/// Full breakdown, or `None` while fewer than `MIN_ACTIONS` are recorded.
pub fn compute(actions: &RecentActions) -> Option<PredictabilityBreakdown> {
    if actions.len() < MIN_ACTIONS {
        return None;
    }
    let pattern_strength = pattern_strength(actions);
    let consistency = consistency(actions);
    let variance = situational_variance(actions);
    let predictability = (PATTERN_WEIGHT * pattern_strength
        + CONSISTENCY_WEIGHT * consistency
        + VARIANCE_WEIGHT * (1.0 - variance))
        .clamp(0.0, 1.0);
    Some(PredictabilityBreakdown {
        pattern_strength,
        consistency,
        variance,
        predictability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::recent_actions::ActionContext;
    use crate::domain::cards_serde::parse_card_token;

    fn lead(token: &str, stake: u16, ts: u64) -> ObservedAction {
        ObservedAction {
            card: parse_card_token(token).unwrap(),
            context: ActionContext {
                role: Role::Leader,
                round_no: ts as u16 + 1,
                stake,
                is_trump: false,
                followed_suit: None,
                score_differential: 0,
            },
            timestamp: ts,
        }
    }

    #[test]
    fn needs_three_actions() {
        let mut ring = RecentActions::default();
        ring.push(lead("3S", 0, 0));
        ring.push(lead("4S", 0, 1));
        assert!(compute(&ring).is_none());
        ring.push(lead("5S", 0, 2));
        assert!(compute(&ring).is_some());
    }

    #[test]
    fn same_suit_low_leads_are_fully_predictable() {
        let mut ring = RecentActions::default();
        for (i, tok) in ["3S", "4S", "5S", "6S"].iter().enumerate() {
            ring.push(lead(tok, 0, i as u64));
        }
        let b = compute(&ring).unwrap();
        assert_eq!(b.pattern_strength, 1.0);
        assert_eq!(b.consistency, 1.0);
        assert_eq!(b.variance, 0.0);
        assert!((b.predictability - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_play_scores_lower() {
        let mut ring = RecentActions::default();
        ring.push(lead("AS", 0, 0));
        ring.push(lead("3H", 0, 1));
        ring.push(lead("7C", 20, 2));
        ring.push(lead("4D", 20, 3));
        let b = compute(&ring).unwrap();
        assert_eq!(b.pattern_strength, 0.0);
        assert!((b.consistency - 0.5).abs() < 1e-9);
        assert!(b.predictability < 0.5);
        assert!((0.0..=1.0).contains(&b.predictability));
    }
}
