//! Capture risk of a card, computed exactly from the unseen cards.
//!
//! The opposing side's cards are modelled as one pooled hand of `k` cards
//! drawn uniformly from the unseen cards it can hold (unseen minus the
//! suits it is known to be void in). The card is beaten when that hand
//! holds a higher card of the card's suit, or holds no card of the suit
//! and at least one trump.

use crate::domain::cards_logic::card_beats;
use crate::domain::dealing::full_deck;
use crate::domain::{Card, Suit};

/// `C(n, k) / C(m, k)` for `n <= m`, the chance that `k` draws from `m`
/// cards all land in a fixed subset of size `n`.
fn all_from_subset(n: usize, m: usize, k: usize) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if n < k || m < k {
        return 0.0;
    }
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (m - i) as f64)
}

/// Cards not in `known`: the hand plus every revealed card.
pub fn unseen_cards(known: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let known: Vec<Card> = known.into_iter().collect();
    full_deck().into_iter().filter(|c| !known.contains(c)).collect()
}

/// Probability that `card`, once on the table, is beaten by the opposing hand.
///
/// `unseen` are the candidate cards, `voids` the suits the opposing side
/// has shown it lacks, `held` the number of cards it holds.
pub fn capture_risk(card: Card, trump: Suit, unseen: &[Card], voids: &[Suit], held: usize) -> f64 {
    let pool: Vec<Card> = unseen
        .iter()
        .copied()
        .filter(|c| !voids.contains(&c.suit))
        .collect();
    let m = pool.len();
    let k = held.min(m);
    if k == 0 {
        return 0.0;
    }

    let higher = pool
        .iter()
        .filter(|c| c.suit == card.suit && card_beats(**c, card, trump))
        .count();
    let p_no_higher = all_from_subset(m - higher, m, k);

    if card.suit == trump {
        return (1.0 - p_no_higher).clamp(0.0, 1.0);
    }

    let same_suit = pool.iter().filter(|c| c.suit == card.suit).count();
    let trumps = pool.iter().filter(|c| c.suit == trump).count();
    let p_no_suit = all_from_subset(m - same_suit, m, k);
    let p_no_suit_no_trump = all_from_subset(m - same_suit - trumps, m, k);

    (1.0 - p_no_higher + (p_no_suit - p_no_suit_no_trump)).clamp(0.0, 1.0)
}
