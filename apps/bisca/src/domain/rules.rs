//! Match-wide constants and seat/team arithmetic.

use crate::domain::state::{Seat, TeamId};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 36;
/// Sum of point values over one full deck.
///
/// The 120-point match total only holds once the draw pile is exhausted and
/// every dealt card has been played; matches cut short score less.
pub const DECK_POINTS: u16 = 120;
pub const HAND_SIZE: usize = 3;
pub const SUPPORTED_PLAYER_COUNTS: [usize; 3] = [2, 4, 6];

pub fn require_supported_players(players: usize) -> Result<usize, DomainError> {
    if SUPPORTED_PLAYER_COUNTS.contains(&players) {
        Ok(players)
    } else {
        Err(DomainError::UnsupportedPlayerCount(players))
    }
}

/// Rounds in a full match: every card of the deck is played once.
pub fn total_rounds_for(players: usize) -> Result<u16, DomainError> {
    let players = require_supported_players(players)?;
    Ok((DECK_SIZE / players) as u16)
}

/// Team of a seat: each seat is its own team in a 2-player match, teams
/// alternate seats otherwise.
pub fn team_of(seat: Seat, players: usize) -> TeamId {
    if players <= 2 {
        seat
    } else {
        seat % 2
    }
}

/// Whether team bonuses (first-round trump-3 and rank-superiority) apply.
pub fn is_team_match(players: usize) -> bool {
    players == 4 || players == 6
}

/// Returns the next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, players: usize) -> Seat {
    ((seat as usize + 1) % players) as Seat
}

/// Seats in play order starting at `start`.
pub fn seats_from(start: Seat, players: usize) -> impl Iterator<Item = Seat> {
    (0..players).map(move |n| ((start as usize + n) % players) as Seat)
}
