//! Domain-level error type.
//!
//! Raised by the pure game layer (dealing, parsing, strict round evaluation).
//! Engine preconditions live in `crate::ai::AiError`, which wraps this type.

use thiserror::Error;

use crate::domain::state::Seat;
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The evaluator received a move list that does not fit the match.
    #[error("malformed move set: expected {expected} moves, got {actual} ({detail})")]
    MalformedMoveSet {
        expected: usize,
        actual: usize,
        detail: String,
    },
    #[error("unsupported player count: {0}")]
    UnsupportedPlayerCount(usize),
    #[error("parse card: {0:?}")]
    ParseCard(String),
    #[error("invalid seat: {0}")]
    InvalidSeat(Seat),
    /// A seat tried to play a card it may not play now.
    #[error("illegal play by seat {seat}: {detail}")]
    IllegalPlay { seat: Seat, detail: String },
}

impl DomainError {
    pub fn malformed(expected: usize, actual: usize, detail: impl Into<String>) -> Self {
        Self::MalformedMoveSet {
            expected,
            actual,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::MalformedMoveSet { .. } => ErrorCode::MalformedMoveSet,
            DomainError::UnsupportedPlayerCount(_) => ErrorCode::UnsupportedPlayerCount,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
            DomainError::InvalidSeat(_) => ErrorCode::InvalidSeat,
            DomainError::IllegalPlay { .. } => ErrorCode::IllegalPlay,
        }
    }
}
