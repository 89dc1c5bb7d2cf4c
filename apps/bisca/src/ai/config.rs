//! AI configuration handling.
//!
//! Provides a typed view over a JSON engine config, extracting the standard
//! fields while preserving engine-specific custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ai::difficulty::Difficulty;
use crate::ai::memory::DEFAULT_DECAY_FACTOR;
use crate::ai::personality::Personality;

/// Standard configuration for AI players.
///
/// # Example JSON Config
///
/// ```json
/// {
///   "seed": 12345,
///   "personality": "trap_setter",
///   "difficulty": "very_hard",
///   "decay_factor": 0.9,
///   "notes": "anything else lands in custom"
/// }
/// ```
///
/// Unknown or unparsable configs fall back to the defaults: analytical,
/// medium, decay 0.95, entropy seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<Personality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Per-observation decay of the opponent behaviour metrics, in (0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_factor: Option<f64>,

    /// Fields outside the standard schema.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON value.
    ///
    /// If the input is `None` or does not deserialize, returns an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            // Try to deserialize, falling back to empty config on error
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn personality(&self) -> Personality {
        self.personality.unwrap_or(Personality::Analytical)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(Difficulty::Medium)
    }

    /// Decay factor, defaulting when absent or outside (0, 1].
    pub fn decay_factor(&self) -> f64 {
        match self.decay_factor {
            Some(d) if d > 0.0 && d <= 1.0 => d,
            _ => DEFAULT_DECAY_FACTOR,
        }
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            personality: None,
            difficulty: None,
            decay_factor: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
