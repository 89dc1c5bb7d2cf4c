//! Cross-match store of inferred bluff situations.
//!
//! A bluff is a zero-point card played while a sizeable stake is on the
//! line. Each situation signature keeps how often it was seen and how often
//! the bluffing side went on to take the round. The store outlives a match;
//! persisting it is the caller's business.

use std::collections::HashMap;

use crate::domain::{Card, Rank, Suit};

const MEDIUM_STAKE: u16 = 5;
const HIGH_STAKE: u16 = 15;
const CLOSE_MARGIN: i16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StakeBucket {
    Low,
    Medium,
    High,
}

impl StakeBucket {
    pub fn of(stake: u16) -> Self {
        if stake < MEDIUM_STAKE {
            StakeBucket::Low
        } else if stake < HIGH_STAKE {
            StakeBucket::Medium
        } else {
            StakeBucket::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreBucket {
    Behind,
    Close,
    Ahead,
}

impl ScoreBucket {
    /// Bucket of a score differential seen from the player in question.
    pub fn of(differential: i16) -> Self {
        if differential <= -CLOSE_MARGIN {
            ScoreBucket::Behind
        } else if differential >= CLOSE_MARGIN {
            ScoreBucket::Ahead
        } else {
            ScoreBucket::Close
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SituationSignature {
    pub suit: Suit,
    pub rank: Rank,
    pub stake: StakeBucket,
    pub score: ScoreBucket,
}

impl SituationSignature {
    pub fn new(card: Card, stake: u16, differential: i16) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            stake: StakeBucket::of(stake),
            score: ScoreBucket::of(differential),
        }
    }
}

/// Whether a play counts as a bluff: no points while the stake is not low.
pub fn is_bluff(card: Card, stake: u16) -> bool {
    card.points() == 0 && StakeBucket::of(stake) != StakeBucket::Low
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternEntry {
    pub frequency: u32,
    pub successes: u32,
}

impl PatternEntry {
    pub fn success_rate(&self) -> f64 {
        if self.frequency == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.frequency)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternStore {
    entries: HashMap<SituationSignature, PatternEntry>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, signature: SituationSignature, success: bool) {
        let entry = self.entries.entry(signature).or_default();
        entry.frequency += 1;
        if success {
            entry.successes += 1;
        }
    }

    pub fn get(&self, signature: &SituationSignature) -> Option<&PatternEntry> {
        self.entries.get(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SituationSignature, &PatternEntry)> {
        self.entries.iter()
    }

    /// Fold another store in, summing counts per signature.
    pub fn merge(&mut self, other: &PatternStore) {
        for (sig, entry) in other.iter() {
            let mine = self.entries.entry(*sig).or_default();
            mine.frequency += entry.frequency;
            mine.successes += entry.successes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_serde::parse_card_token;

    #[test]
    fn buckets_have_fixed_edges() {
        assert_eq!(StakeBucket::of(4), StakeBucket::Low);
        assert_eq!(StakeBucket::of(5), StakeBucket::Medium);
        assert_eq!(StakeBucket::of(14), StakeBucket::Medium);
        assert_eq!(StakeBucket::of(15), StakeBucket::High);
        assert_eq!(ScoreBucket::of(-10), ScoreBucket::Behind);
        assert_eq!(ScoreBucket::of(9), ScoreBucket::Close);
        assert_eq!(ScoreBucket::of(10), ScoreBucket::Ahead);
    }

    #[test]
    fn records_frequency_and_success_rate() {
        let card = parse_card_token("4S").unwrap();
        let sig = SituationSignature::new(card, 20, 0);
        let mut store = PatternStore::new();
        store.record(sig, true);
        store.record(sig, false);
        store.record(sig, true);
        let entry = store.get(&sig).unwrap();
        assert_eq!(entry.frequency, 3);
        assert!((entry.success_rate() - 2.0 / 3.0).abs() < 1e-9);

        let mut other = PatternStore::new();
        other.merge(&store);
        other.merge(&store);
        assert_eq!(other.get(&sig).map(|e| e.frequency), Some(6));
    }

    #[test]
    fn bluffs_are_pointless_cards_under_stake() {
        let low = parse_card_token("3H").unwrap();
        let ace = parse_card_token("AH").unwrap();
        assert!(is_bluff(low, 5));
        assert!(!is_bluff(low, 4));
        assert!(!is_bluff(ace, 20));
    }
}
