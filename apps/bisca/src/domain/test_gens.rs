// Proptest generators for domain types.
// Card sets are drawn without replacement so every generated round is a legal deal.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::rules::team_of;
use crate::domain::state::TeamId;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck = full_deck();
        // Shuffle and take first N
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// Two distinct cards: (first played, second played).
pub fn card_pair() -> impl Strategy<Value = (Card, Card)> {
    unique_cards(2).prop_map(|cards| (cards[0], cards[1]))
}

/// A complete team round: `(team, card)` plays in seat order for 4 or 6 seats.
pub fn team_round() -> impl Strategy<Value = (usize, Vec<(TeamId, Card)>)> {
    prop_oneof![Just(4usize), Just(6usize)].prop_flat_map(|players| {
        unique_cards(players).prop_map(move |cards| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(seat, card)| (team_of(seat as u8, players), card))
                .collect();
            (players, plays)
        })
    })
}
