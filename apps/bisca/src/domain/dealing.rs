//! Deterministic deck generation and dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{require_supported_players, total_rounds_for, DECK_SIZE, HAND_SIZE};
use crate::domain::state::{GameState, Player, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate the full 36-card deck, one card per (suit, rank) pair.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Full deck shuffled with a seeded ChaCha8 stream.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal the opening state of a match.
///
/// Each seat receives `HAND_SIZE` cards in turn; the rest form the draw pile.
/// The bottom card of the pile (index 0; draws take from the end) is turned
/// and fixes the trump suit. The
/// starting seat is drawn from the same seeded stream.
pub fn deal_game(players: usize, seed: u64) -> Result<GameState, DomainError> {
    let players = require_supported_players(players)?;
    let total_rounds = total_rounds_for(players)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = full_deck();
    deck.shuffle(&mut rng);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); players];
    let mut cards = deck.into_iter();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            if let Some(card) = cards.next() {
                hand.push(card);
            }
        }
    }
    let draw_pile: Vec<Card> = cards.collect();
    let trump = draw_pile
        .first()
        .map(|c| c.suit)
        .unwrap_or(Suit::Spades);
    let current_seat = rng.random_range(0..players) as Seat;

    Ok(GameState {
        trump,
        players: hands.into_iter().map(Player::with_hand).collect(),
        current_seat,
        cards_on_table: Vec::new(),
        round_stake: 0,
        round_history: Vec::new(),
        current_round: 1,
        total_rounds,
        draw_pile,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn full_deck_has_every_card_once() {
        let deck = full_deck();
        assert_eq!(deck.len(), 36);
        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn deal_is_deterministic_per_seed() {
        let a = deal_game(2, 42).unwrap();
        let b = deal_game(2, 42).unwrap();
        assert_eq!(a, b);
        let c = deal_game(2, 43).unwrap();
        assert_ne!(a.players[0].hand, c.players[0].hand);
    }

    #[test]
    fn deal_conserves_the_deck() {
        for players in [2, 4, 6] {
            let state = deal_game(players, 9).unwrap();
            let mut all: Vec<Card> = state
                .players
                .iter()
                .flat_map(|p| p.hand.iter().copied())
                .chain(state.draw_pile.iter().copied())
                .collect();
            all.sort();
            let mut deck = full_deck();
            deck.sort();
            assert_eq!(all, deck);
            assert!(state.players.iter().all(|p| p.hand.len() == HAND_SIZE));
            assert!((state.current_seat as usize) < players);
        }
    }

    #[test]
    fn trump_is_the_turned_card() {
        let state = deal_game(4, 1234).unwrap();
        assert_eq!(Some(state.trump), state.draw_pile.first().map(|c| c.suit));
    }

    #[test]
    fn rejects_odd_tables() {
        assert_eq!(deal_game(3, 1), Err(DomainError::UnsupportedPlayerCount(3)));
    }
}
