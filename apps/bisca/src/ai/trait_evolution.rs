//! Slow drift of the engine's own traits from move outcomes.

use rand::{Rng, RngCore};

use crate::ai::recent_actions::RingBuffer;

pub const TRAIT_MIN: f64 = 0.0;
pub const TRAIT_MAX: f64 = 100.0;
pub const TRAIT_STEP: f64 = 5.0;
pub const FAILURE_CORRECTION: f64 = 0.8;
pub const FAILURE_STREAK: u8 = 3;
const HISTORY_CAPACITY: usize = 20;

/// Coarse classification of the engine's own moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Aggressive,
    Defensive,
    Bluff,
}

impl MoveCategory {
    const fn slot(self) -> usize {
        match self {
            MoveCategory::Aggressive => 0,
            MoveCategory::Defensive => 1,
            MoveCategory::Bluff => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traits {
    pub aggressiveness: f64,
    pub risk_aversion: f64,
    pub deception_tendency: f64,
    pub adaptability: f64,
}

impl Default for Traits {
    fn default() -> Self {
        Self {
            aggressiveness: 50.0,
            risk_aversion: 50.0,
            deception_tendency: 50.0,
            adaptability: 50.0,
        }
    }
}

impl Traits {
    fn slot_mut(&mut self, category: MoveCategory) -> &mut f64 {
        match category {
            MoveCategory::Aggressive => &mut self.aggressiveness,
            MoveCategory::Defensive => &mut self.risk_aversion,
            MoveCategory::Bluff => &mut self.deception_tendency,
        }
    }

    fn clamp(&mut self) {
        for t in [
            &mut self.aggressiveness,
            &mut self.risk_aversion,
            &mut self.deception_tendency,
            &mut self.adaptability,
        ] {
            *t = t.clamp(TRAIT_MIN, TRAIT_MAX);
        }
    }

    /// Trait value mapped to [-1, 1] around the neutral 50.
    pub fn centered(value: f64) -> f64 {
        (value - 50.0) / 50.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitSnapshot {
    pub traits: Traits,
    pub category: MoveCategory,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitEvolution {
    traits: Traits,
    failure_streaks: [u8; 3],
    history: RingBuffer<TraitSnapshot>,
}

impl Default for TraitEvolution {
    fn default() -> Self {
        Self {
            traits: Traits::default(),
            failure_streaks: [0; 3],
            history: RingBuffer::new(HISTORY_CAPACITY),
        }
    }
}

impl TraitEvolution {
    pub fn traits(&self) -> &Traits {
        &self.traits
    }

    pub fn history(&self) -> impl Iterator<Item = &TraitSnapshot> {
        self.history.iter()
    }

    pub fn failure_streak(&self, category: MoveCategory) -> u8 {
        self.failure_streaks[category.slot()]
    }

    /// Nudge the category's trait by one step toward the outcome.
    ///
    /// The third consecutive failure of a category scales its trait by
    /// `FAILURE_CORRECTION` instead and resets the streak.
    pub fn record_outcome(&mut self, category: MoveCategory, success: bool) {
        let slot = category.slot();
        if success {
            self.failure_streaks[slot] = 0;
            *self.traits.slot_mut(category) += TRAIT_STEP;
        } else {
            self.failure_streaks[slot] += 1;
            if self.failure_streaks[slot] >= FAILURE_STREAK {
                *self.traits.slot_mut(category) *= FAILURE_CORRECTION;
                self.failure_streaks[slot] = 0;
            } else {
                *self.traits.slot_mut(category) -= TRAIT_STEP;
            }
            self.traits.adaptability += TRAIT_STEP;
        }
        self.traits.clamp();
        self.history.push(TraitSnapshot {
            traits: self.traits,
            category,
            success,
        });
    }

    /// Random shake of every trait by up to one step.
    pub fn perturb(&mut self, rng: &mut dyn RngCore) {
        for t in [
            &mut self.traits.aggressiveness,
            &mut self.traits.risk_aversion,
            &mut self.traits.deception_tendency,
            &mut self.traits.adaptability,
        ] {
            *t += rng.random_range(-TRAIT_STEP..=TRAIT_STEP);
        }
        self.traits.clamp();
    }
}
