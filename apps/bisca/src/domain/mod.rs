//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod round_flow;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_deck;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, compare_rank, hand_has_suit, legal_responses, point_value};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_game, full_deck};
pub use round_flow::{complete_round, play_card, table_plays};
pub use seed_derivation::{derive_dealing_seed, derive_engine_seed};
pub use state::{GameState, Player, PlayerId, RoundRecord, Seat, TeamId};
pub use tricks::{resolve_pair, resolve_round, PairOutcome, PairWinner, TrickOutcome, WinReason};
