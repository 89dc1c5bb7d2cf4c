//! AI player module - automated card choices.
//!
//! This module provides:
//! - the `AiPlayer` trait seats are driven through
//! - `AiEngine`: heuristic engine with personalities, difficulty tiers,
//!   opponent modelling and adaptive personality switching
//! - `RandomPlayer`: uniform random legal moves (seedable for tests)
//! - a static registry of named factories

mod config;
pub mod deception;
mod difficulty;
pub mod engine;
pub mod memory;
pub mod pattern_store;
pub mod personality;
pub mod predictability;
pub mod profile;
mod random;
pub mod recent_actions;
pub mod registry;
pub mod risk;
mod trait_def;
pub mod trait_evolution;

pub use config::AiConfig;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use engine::{AiEngine, Decision, PersonalitySwitch, SwitchReason};
pub use memory::{OpponentMemory, Tendency};
pub use pattern_store::PatternStore;
pub use personality::Personality;
pub use profile::OpponentProfile;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};
pub use trait_evolution::MoveCategory;

/// Create an AI player from a registry name and optional JSON config.
///
/// Returns None if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer + Send>> {
    let factory = registry::by_name(ai_type)?;
    Some((factory.make)(&AiConfig::from_json(config)))
}
