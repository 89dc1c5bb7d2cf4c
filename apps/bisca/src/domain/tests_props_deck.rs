use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::{card_points, compare_rank};
use crate::domain::dealing::{deal_game, full_deck, shuffled_deck};
use crate::domain::rules::{DECK_POINTS, DECK_SIZE};
use crate::domain::{test_gens, test_prelude, Rank};

#[test]
fn full_deck_is_complete_and_worth_120() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    let distinct: HashSet<_> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert_eq!(card_points(&deck), DECK_POINTS);
    assert_eq!(card_points(&deck), 120);
}

#[test]
fn rank_order_is_strict_total_order() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            let ab = compare_rank(a, b);
            assert_eq!(ab, compare_rank(b, a).reverse(), "antisymmetry {a:?} {b:?}");
            assert_eq!(ab == Ordering::Equal, a == b);
            for c in Rank::ALL {
                if ab == Ordering::Greater && compare_rank(b, c) == Ordering::Greater {
                    assert_eq!(compare_rank(a, c), Ordering::Greater, "transitivity {a:?} {b:?} {c:?}");
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Shuffling never loses or duplicates a card.
    #[test]
    fn prop_shuffled_deck_is_permutation(seed in any::<u64>()) {
        let mut deck = shuffled_deck(seed);
        let mut reference = full_deck();
        deck.sort();
        reference.sort();
        prop_assert_eq!(deck, reference);
    }

    /// Dealt hands and draw pile together hold the whole deck; trump is the bottom card.
    #[test]
    fn prop_deal_covers_deck(seed in any::<u64>(), players in prop_oneof![Just(2usize), Just(4), Just(6)]) {
        let state = deal_game(players, seed).unwrap();
        let mut all: Vec<_> = state.players.iter().flat_map(|p| p.hand.iter().copied()).collect();
        all.extend(state.draw_pile.iter().copied());
        prop_assert_eq!(all.len(), DECK_SIZE);
        prop_assert_eq!(card_points(&all), DECK_POINTS);
        prop_assert_eq!(Some(state.trump), state.draw_pile.first().map(|c| c.suit));
        prop_assert!((state.current_seat as usize) < players);
        prop_assert_eq!(deal_game(players, seed).unwrap(), state);
    }

    #[test]
    fn prop_point_value_depends_only_on_rank(card in test_gens::card(), other in test_gens::suit()) {
        let moved = crate::domain::Card::new(other, card.rank);
        prop_assert_eq!(card.points(), moved.points());
    }
}
