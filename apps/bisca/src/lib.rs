#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Decision core of a two-team trick-taking card game: card model, round
//! resolution and scoring, the AI opponent engine, and the round evaluator.

pub mod ai;
pub mod domain;
pub mod errors;
pub mod evaluation;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{AiConfig, AiEngine, AiError, AiPlayer, Difficulty, Personality, RandomPlayer};
pub use domain::{Card, GameState, Rank, Suit};
pub use errors::{DomainError, ErrorCode};
pub use evaluation::{PlayerMove, RoundEvaluation, RoundEvaluator};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
