//! AI player trait definition.

use thiserror::Error;

use crate::ai::personality::Personality;
use crate::domain::state::{GameState, PlayerId, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;
use crate::evaluation::StatsSummary;

/// Errors raised by AI players.
///
/// Precondition violations are caller bugs and are never recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// A move was requested before `initialize`.
    #[error("engine used before initialize")]
    EngineNotInitialized,
    /// The acting hand is empty.
    #[error("seat {seat} has no cards to play")]
    EmptyHand { seat: Seat },
    #[error("invalid seat: {0}")]
    InvalidSeat(Seat),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AiError::EngineNotInitialized => ErrorCode::EngineNotInitialized,
            AiError::EmptyHand { .. } => ErrorCode::EmptyHand,
            AiError::InvalidSeat(_) => ErrorCode::InvalidSeat,
            AiError::Domain(e) => e.code(),
        }
    }
}

/// Trait for AI players.
///
/// A player is bound to one seat with `initialize` and then asked for hand
/// indices. It reads the latest `GameState` handed to it through
/// `initialize` or `update_memory` and never mutates the caller's state.
pub trait AiPlayer: Send {
    /// Registry name of the implementation.
    fn name(&self) -> &'static str;

    /// Bind to `seat` and snapshot the starting hand.
    fn initialize(&mut self, state: &GameState, seat: Seat) -> Result<(), AiError>;

    /// Hand index of the card to lead with.
    fn choose_leading_card(&mut self) -> Result<usize, AiError>;

    /// Hand index of the card to answer `lead` with.
    fn choose_responding_card(&mut self, lead: Card) -> Result<usize, AiError>;

    /// Hand index of the card to play onto a partially played round.
    ///
    /// `table` lists the plays so far, leader first. The default treats
    /// the lead card as the only card on the table.
    fn choose_responding_card_on_table(&mut self, table: &[(Seat, Card)]) -> Result<usize, AiError> {
        match table.first() {
            Some(&(_, lead)) => self.choose_responding_card(lead),
            None => self.choose_leading_card(),
        }
    }

    /// Refresh the player's view after a completed round.
    fn update_memory(&mut self, state: &GameState) -> Result<(), AiError>;

    /// Rolling move statistics of `player_id` over the rounds seen so far.
    fn get_stats(&self, _player_id: PlayerId) -> Option<StatsSummary> {
        None
    }

    /// Re-select the active personality; returns the new one on a switch.
    fn adapt_personality(&mut self) -> Option<Personality> {
        None
    }
}
