//! Opponent memory: a rolling, decaying picture of the opposing side.
//!
//! One engine owns one memory for the whole match. Everything in it is
//! derived from observed cards and round context only.

use crate::ai::pattern_store::{is_bluff, PatternStore, SituationSignature};
use crate::ai::predictability::{self, PredictabilityBreakdown};
use crate::ai::recent_actions::{ActionContext, ObservedAction, RecentActions, Role};
use crate::ai::trait_evolution::TraitEvolution;
use crate::domain::{Card, Suit};

pub const DEFAULT_DECAY_FACTOR: f64 = 0.95;
const METRIC_STEP: f64 = 0.2;
const SMALL_STEP: f64 = 0.1;
const LOW_STAKE: u16 = 5;

/// Decaying behaviour metrics, each in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BehaviorMetrics {
    pub saves_trumps: f64,
    pub plays_aggressively: f64,
    pub avoids_risk: f64,
}

/// The opponent's strongest positive tendency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tendency {
    SavesTrumps,
    PlaysAggressively,
    AvoidsRisk,
}

impl BehaviorMetrics {
    fn decay(&mut self, factor: f64) {
        self.saves_trumps *= factor;
        self.plays_aggressively *= factor;
        self.avoids_risk *= factor;
    }

    fn clamp(&mut self) {
        self.saves_trumps = self.saves_trumps.clamp(-1.0, 1.0);
        self.plays_aggressively = self.plays_aggressively.clamp(-1.0, 1.0);
        self.avoids_risk = self.avoids_risk.clamp(-1.0, 1.0);
    }

    /// Largest strictly positive metric, if any.
    pub fn dominant(&self) -> Option<Tendency> {
        [
            (Tendency::PlaysAggressively, self.plays_aggressively),
            (Tendency::AvoidsRisk, self.avoids_risk),
            (Tendency::SavesTrumps, self.saves_trumps),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0.0)
        .fold(None, |best: Option<(Tendency, f64)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        })
        .map(|(t, _)| t)
    }
}

/// Per-match counters of what the opponent played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub actions: u32,
    pub trumps_played: u32,
    pub high_value_plays: u32,
    pub suit_leads: [u32; 4],
}

/// Outcome of the engine's own bait attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeceptionTracker {
    pub bait_attempts: u32,
    pub bait_successes: u32,
}

impl DeceptionTracker {
    pub fn record(&mut self, success: bool) {
        self.bait_attempts += 1;
        if success {
            self.bait_successes += 1;
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.bait_attempts == 0 {
            0.0
        } else {
            f64::from(self.bait_successes) / f64::from(self.bait_attempts)
        }
    }
}

/// One observed opponent card with the facts needed to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub card: Card,
    pub context: ActionContext,
    pub led_suit: Suit,
    /// Points of the lead card, when the opponent responded.
    pub lead_points: u8,
    pub trump: Suit,
    /// The opponent's side took the round.
    pub won_round: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpponentMemory {
    decay_factor: f64,
    voids: [bool; 4],
    metrics: BehaviorMetrics,
    predictability: f64,
    breakdown: Option<PredictabilityBreakdown>,
    recent: RecentActions,
    stats: PlayStats,
    traits: TraitEvolution,
    deception: DeceptionTracker,
    starting_hand: Vec<Card>,
    observations: u64,
}

impl Default for OpponentMemory {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_FACTOR)
    }
}

impl OpponentMemory {
    pub fn new(decay_factor: f64) -> Self {
        Self {
            decay_factor: decay_factor.clamp(0.0, 1.0),
            voids: [false; 4],
            metrics: BehaviorMetrics::default(),
            predictability: 0.5,
            breakdown: None,
            recent: RecentActions::default(),
            stats: PlayStats::default(),
            traits: TraitEvolution::default(),
            deception: DeceptionTracker::default(),
            starting_hand: Vec::new(),
            observations: 0,
        }
    }

    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }

    pub fn set_starting_hand(&mut self, hand: &[Card]) {
        self.starting_hand = hand.to_vec();
    }

    pub fn starting_hand(&self) -> &[Card] {
        &self.starting_hand
    }

    /// Mark `suit` as exhausted for the opponent. Never un-set.
    pub fn mark_void(&mut self, suit: Suit) {
        self.voids[suit.index()] = true;
    }

    pub fn is_void(&self, suit: Suit) -> bool {
        self.voids[suit.index()]
    }

    pub fn voids(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(|s| self.is_void(*s))
    }

    pub fn metrics(&self) -> &BehaviorMetrics {
        &self.metrics
    }

    pub fn predictability(&self) -> f64 {
        self.predictability
    }

    pub fn predictability_breakdown(&self) -> Option<&PredictabilityBreakdown> {
        self.breakdown.as_ref()
    }

    /// Suit-repetition strength of recent leads; 0 until measured.
    pub fn pattern_strength(&self) -> f64 {
        self.breakdown.map_or(0.0, |b| b.pattern_strength)
    }

    pub fn recent_actions(&self) -> &RecentActions {
        &self.recent
    }

    pub fn stats(&self) -> &PlayStats {
        &self.stats
    }

    pub fn traits(&self) -> &TraitEvolution {
        &self.traits
    }

    pub fn traits_mut(&mut self) -> &mut TraitEvolution {
        &mut self.traits
    }

    pub fn deception(&self) -> &DeceptionTracker {
        &self.deception
    }

    pub fn deception_mut(&mut self) -> &mut DeceptionTracker {
        &mut self.deception
    }

    /// Fold one observed opponent card into the memory.
    ///
    /// Metrics decay first, then take the bounded increments for the play;
    /// bluffs are also written to `patterns`.
    pub fn observe(&mut self, obs: &Observation, patterns: &mut PatternStore) {
        let card = obs.card;
        let is_trump = card.suit == obs.trump;

        if obs.context.followed_suit == Some(false) {
            self.mark_void(obs.led_suit);
        }

        self.metrics.decay(self.decay_factor);
        match obs.context.role {
            Role::Leader => {
                if card.is_high_value() && obs.context.stake < LOW_STAKE {
                    self.metrics.plays_aggressively += METRIC_STEP;
                    self.metrics.avoids_risk -= METRIC_STEP;
                } else if card.points() == 0 && !is_trump {
                    self.metrics.plays_aggressively -= SMALL_STEP;
                    self.metrics.avoids_risk += SMALL_STEP;
                }
                if is_trump {
                    self.metrics.saves_trumps -= SMALL_STEP;
                }
            }
            Role::Responder => {
                let off_suit = card.suit != obs.led_suit;
                if off_suit && !is_trump {
                    // Discarded instead of ruffing.
                    self.metrics.saves_trumps += METRIC_STEP;
                }
                if off_suit && is_trump && obs.context.stake < LOW_STAKE {
                    self.metrics.saves_trumps -= METRIC_STEP;
                }
                if obs.won_round && card.is_high_value() {
                    self.metrics.plays_aggressively += SMALL_STEP;
                }
                if !obs.won_round && obs.lead_points > 0 && card.points() == 0 {
                    self.metrics.avoids_risk += SMALL_STEP;
                }
            }
        }
        self.metrics.clamp();

        self.stats.actions += 1;
        if is_trump {
            self.stats.trumps_played += 1;
        }
        if card.is_high_value() {
            self.stats.high_value_plays += 1;
        }
        if obs.context.role == Role::Leader {
            self.stats.suit_leads[card.suit.index()] += 1;
        }

        if is_bluff(card, obs.context.stake) {
            patterns.record(
                SituationSignature::new(card, obs.context.stake, obs.context.score_differential),
                obs.won_round,
            );
        }

        self.recent.push(ObservedAction {
            card,
            context: obs.context,
            timestamp: self.observations,
        });
        self.observations += 1;

        if let Some(b) = predictability::compute(&self.recent) {
            self.predictability = b.predictability;
            self.breakdown = Some(b);
        }
    }
}
