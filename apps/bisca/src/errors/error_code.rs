//! Error codes for the bisca core.
//!
//! Every error variant maps to exactly one code here. Codes are
//! SCREAMING_SNAKE_CASE and are what the surrounding system shows or logs.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Engine preconditions
    /// A move was requested before `initialize`
    EngineNotInitialized,
    /// The acting hand has no cards
    EmptyHand,
    /// Seat is not part of the match
    InvalidSeat,

    // Domain
    /// Evaluator input does not fit the player count or team layout
    MalformedMoveSet,
    /// Only 2, 4 and 6 player matches exist
    UnsupportedPlayerCount,
    /// Card token could not be parsed
    ParseCard,
    /// Card not in hand, out of turn, or not following suit
    IllegalPlay,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::EngineNotInitialized,
        ErrorCode::EmptyHand,
        ErrorCode::InvalidSeat,
        ErrorCode::MalformedMoveSet,
        ErrorCode::UnsupportedPlayerCount,
        ErrorCode::ParseCard,
        ErrorCode::IllegalPlay,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EngineNotInitialized => "ENGINE_NOT_INITIALIZED",
            ErrorCode::EmptyHand => "EMPTY_HAND",
            ErrorCode::InvalidSeat => "INVALID_SEAT",
            ErrorCode::MalformedMoveSet => "MALFORMED_MOVE_SET",
            ErrorCode::UnsupportedPlayerCount => "UNSUPPORTED_PLAYER_COUNT",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::IllegalPlay => "ILLEGAL_PLAY",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
