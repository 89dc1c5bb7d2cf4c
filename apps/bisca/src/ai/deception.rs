//! Bluff estimation and anti-predictability for the top difficulty tier.

use rand::RngCore;

use crate::ai::memory::OpponentMemory;
use crate::ai::pattern_store::{PatternStore, ScoreBucket, SituationSignature, StakeBucket};
use crate::domain::Card;

/// Opponent pattern strength above which the engine shakes its own traits.
pub const PATTERN_THRESHOLD: f64 = 0.7;
/// Sightings after which a signature's success rate is fully trusted.
const CONFIDENT_FREQUENCY: u32 = 5;
const LEAD_PENALTY: f64 = 3.0;
const CAPTURE_PENALTY: f64 = 0.5;

/// Success rate of a stored bait situation, scaled by how often it was seen.
pub fn bait_risk(store: &PatternStore, signature: &SituationSignature) -> f64 {
    store.get(signature).map_or(0.0, |entry| {
        let confidence = f64::from(entry.frequency.min(CONFIDENT_FREQUENCY))
            / f64::from(CONFIDENT_FREQUENCY);
        entry.success_rate() * confidence
    })
}

/// Highest bait risk of `card` over the stake levels a bluff is recorded at.
///
/// `differential` is seen from the side playing `card`.
pub fn card_bait_risk(store: &PatternStore, card: Card, differential: i16) -> f64 {
    [StakeBucket::Medium, StakeBucket::High]
        .into_iter()
        .map(|stake| {
            let sig = SituationSignature {
                suit: card.suit,
                rank: card.rank,
                stake,
                score: ScoreBucket::of(differential),
            };
            bait_risk(store, &sig)
        })
        .fold(0.0, f64::max)
}

/// Penalty for leading a card that looks like a known bait.
pub fn lead_discount(store: &PatternStore, candidate: Card, differential: i16) -> f64 {
    LEAD_PENALTY * card_bait_risk(store, candidate, differential)
}

/// Penalty for spending `points` to take a lead that looks like a known bait.
///
/// `differential` is seen from the leader's side.
pub fn capture_discount(store: &PatternStore, lead: Card, differential: i16, points: u8) -> f64 {
    CAPTURE_PENALTY * f64::from(points) * card_bait_risk(store, lead, differential)
}

/// Shake the engine's traits when the opponent reads as highly patterned.
///
/// Returns whether the traits were perturbed.
pub fn counter_predictability(memory: &mut OpponentMemory, rng: &mut dyn RngCore) -> bool {
    if memory.pattern_strength() > PATTERN_THRESHOLD {
        memory.traits_mut().perturb(rng);
        true
    } else {
        false
    }
}
