use proptest::prelude::*;

use crate::domain::cards_logic::card_beats;
use crate::domain::tricks::{resolve_pair, resolve_round, round_strength, PairWinner, WinReason};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Trump beats non-trump whatever the ranks and the order of play.
    #[test]
    fn prop_trump_beats_non_trump((first, second) in test_gens::card_pair(), trump in test_gens::suit()) {
        let out = resolve_pair(first, second, trump);
        match (first.suit == trump, second.suit == trump) {
            (true, false) => prop_assert_eq!(out.winner, PairWinner::First),
            (false, true) => prop_assert_eq!(out.winner, PairWinner::Second),
            (true, true) => {
                let expected = if second.rank > first.rank { PairWinner::Second } else { PairWinner::First };
                prop_assert_eq!(out.winner, expected);
            }
            (false, false) => {}
        }
    }

    /// Resolution is a pure function of the inputs.
    #[test]
    fn prop_resolution_is_deterministic((first, second) in test_gens::card_pair(), trump in test_gens::suit()) {
        prop_assert_eq!(resolve_pair(first, second, trump), resolve_pair(first, second, trump));
    }

    /// The pair ladder agrees with `card_beats` seen from the second card.
    #[test]
    fn prop_pair_matches_card_beats((first, second) in test_gens::card_pair(), trump in test_gens::suit()) {
        let out = resolve_pair(first, second, trump);
        prop_assert_eq!(out.winner == PairWinner::Second, card_beats(second, first, trump));
        if first.suit != second.suit && first.suit != trump && second.suit != trump {
            prop_assert_eq!(out.reason, WinReason::FirstPlayed);
        }
    }

    /// A team representative never loses to another card of its own team.
    #[test]
    fn prop_team_representative_never_loses_to_teammate(
        (_players, plays) in test_gens::team_round(),
        trump in test_gens::suit(),
    ) {
        let led = plays[0].1.suit;
        let out = resolve_round(&plays, trump).unwrap();
        for &(team, rep) in &out.representatives {
            let rep_card = plays[rep].1;
            let rep_strength = round_strength(rep_card, led, trump);
            for (i, &(t, card)) in plays.iter().enumerate() {
                if t != team || i == rep {
                    continue;
                }
                let mate = round_strength(card, led, trump);
                prop_assert!(
                    mate.is_none() || mate < rep_strength,
                    "representative {} lost to teammate {}", rep_card, card
                );
            }
        }
        prop_assert!(out.representatives.iter().any(|&(t, i)| t == out.winning_team && i == out.winning_index));
    }

    /// The strongest card on the table takes the round, whoever played it.
    #[test]
    fn prop_strongest_card_takes_the_round(
        (_players, plays) in test_gens::team_round(),
        trump in test_gens::suit(),
    ) {
        let led = plays[0].1.suit;
        let out = resolve_round(&plays, trump).unwrap();
        let strongest = plays
            .iter()
            .enumerate()
            .filter_map(|(i, &(_, c))| round_strength(c, led, trump).map(|s| (s, i)))
            .max()
            .map(|(_, i)| i);
        prop_assert_eq!(Some(out.winning_index), strongest);
    }
}
