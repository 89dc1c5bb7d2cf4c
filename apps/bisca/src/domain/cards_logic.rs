//! Card game logic: point values, rank comparison, suit following, card strength

use std::cmp::Ordering;

use super::cards_types::{Card, Rank, Suit};

/// Fixed point value of a rank.
pub fn point_value(rank: Rank) -> u8 {
    rank.points()
}

/// Compare two ranks by trick strength (A > 7 > K > J > Q > 6 > 5 > 4 > 3).
pub fn compare_rank(a: Rank, b: Rank) -> Ordering {
    a.cmp(&b)
}

/// Sum of point values of the given cards.
pub fn card_points(cards: &[Card]) -> u16 {
    cards.iter().map(|c| u16::from(c.points())).sum()
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Cards a responder may play against `lead`.
///
/// Following suit is mandatory: when the hand holds the led suit only those
/// cards are legal, otherwise every card is.
pub fn legal_responses(hand: &[Card], lead: Suit) -> Vec<Card> {
    if hand_has_suit(hand, lead) {
        hand.iter().copied().filter(|c| c.suit == lead).collect()
    } else {
        hand.to_vec()
    }
}

/// Hand indices of the legal responses, in hand order.
pub fn legal_response_indices(hand: &[Card], lead: Suit) -> Vec<usize> {
    let follow = hand_has_suit(hand, lead);
    hand.iter()
        .enumerate()
        .filter(|(_, c)| !follow || c.suit == lead)
        .map(|(i, _)| i)
        .collect()
}

/// Whether `challenger`, played after `incumbent`, takes the round from it.
///
/// A later card only wins by out-ranking in the same suit or by trumping a
/// non-trump card; between unrelated non-trump suits the earlier card holds.
pub fn card_beats(challenger: Card, incumbent: Card, trump: Suit) -> bool {
    let c_trump = challenger.suit == trump;
    let i_trump = incumbent.suit == trump;
    if c_trump && !i_trump {
        return true;
    }
    if i_trump && !c_trump {
        return false;
    }
    challenger.suit == incumbent.suit && challenger.rank > incumbent.rank
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    #[test]
    fn point_table_matches_ranks() {
        assert_eq!(point_value(Rank::Ace), 11);
        assert_eq!(point_value(Rank::Seven), 10);
        assert_eq!(point_value(Rank::King), 4);
        assert_eq!(point_value(Rank::Jack), 3);
        assert_eq!(point_value(Rank::Queen), 2);
        for rank in [Rank::Six, Rank::Five, Rank::Four, Rank::Three] {
            assert_eq!(point_value(rank), 0);
        }
    }

    #[test]
    fn seven_outranks_king_jack_queen() {
        assert_eq!(compare_rank(Rank::Seven, Rank::King), Ordering::Greater);
        assert_eq!(compare_rank(Rank::King, Rank::Jack), Ordering::Greater);
        assert_eq!(compare_rank(Rank::Jack, Rank::Queen), Ordering::Greater);
        assert_eq!(compare_rank(Rank::Queen, Rank::Six), Ordering::Greater);
        assert_eq!(compare_rank(Rank::Ace, Rank::Seven), Ordering::Greater);
        assert_eq!(compare_rank(Rank::Three, Rank::Three), Ordering::Equal);
    }

    #[test]
    fn card_beats_logic() {
        use Rank::*;
        use Suit::*;
        let trump = Clubs;

        // Same suit: rank decides.
        assert!(card_beats(card(Spades, Ace), card(Spades, Seven), trump));
        assert!(!card_beats(card(Spades, King), card(Spades, Seven), trump));
        // Trump over non-trump regardless of rank.
        assert!(card_beats(card(Clubs, Three), card(Diamonds, King), trump));
        assert!(!card_beats(card(Diamonds, Ace), card(Clubs, Three), trump));
        // Unrelated suits: the earlier card holds.
        assert!(!card_beats(card(Hearts, Ace), card(Spades, Three), trump));
        // Trump against trump: rank decides.
        assert!(card_beats(card(Clubs, Seven), card(Clubs, King), trump));
    }

    #[test]
    fn legal_responses_force_follow_suit() {
        use Rank::*;
        use Suit::*;
        let hand = vec![card(Hearts, Ace), card(Spades, Three), card(Hearts, Four)];
        assert_eq!(
            legal_responses(&hand, Hearts),
            vec![card(Hearts, Ace), card(Hearts, Four)]
        );
        assert_eq!(legal_response_indices(&hand, Hearts), vec![0, 2]);
        assert_eq!(legal_responses(&hand, Diamonds), hand);
        assert_eq!(legal_response_indices(&hand, Diamonds), vec![0, 1, 2]);
    }

    #[test]
    fn test_hand_has_suit() {
        let hand = vec![card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Ace)];
        assert!(hand_has_suit(&hand, Suit::Clubs));
        assert!(!hand_has_suit(&hand, Suit::Hearts));
    }
}
