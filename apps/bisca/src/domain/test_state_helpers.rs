//! Builders for hand-crafted game states in unit tests.

use crate::domain::cards_serde::parse_cards;
use crate::domain::state::{GameState, Player};
use crate::domain::Suit;

fn hand(tokens: &[&str]) -> Vec<crate::domain::Card> {
    parse_cards(tokens).expect("valid card tokens")
}

/// Round-1 state of a 2-player, 18-round match.
pub fn two_player_state(seat0: &[&str], seat1: &[&str], trump: Suit) -> GameState {
    GameState {
        trump,
        players: vec![Player::with_hand(hand(seat0)), Player::with_hand(hand(seat1))],
        current_seat: 0,
        cards_on_table: Vec::new(),
        round_stake: 0,
        round_history: Vec::new(),
        current_round: 1,
        total_rounds: 18,
        draw_pile: Vec::new(),
    }
}

/// Round-1 state of a 4-player, 9-round team match.
pub fn four_player_state(hands: [&[&str]; 4], trump: Suit) -> GameState {
    GameState {
        trump,
        players: hands.iter().map(|h| Player::with_hand(hand(h))).collect(),
        current_seat: 0,
        cards_on_table: Vec::new(),
        round_stake: 0,
        round_history: Vec::new(),
        current_round: 1,
        total_rounds: 9,
        draw_pile: Vec::new(),
    }
}
