use crate::domain::cards_serde::parse_card_token;
use crate::domain::rules::team_of;
use crate::domain::scoring::{first_round_bonus, round_points, FirstRoundBonus};
use crate::domain::tricks::{resolve_pair, resolve_round, PairWinner, WinReason};
use crate::domain::{Card, Suit};

fn c(token: &str) -> Card {
    parse_card_token(token).unwrap()
}

#[test]
fn seven_led_ace_answers_same_suit() {
    let out = resolve_pair(c("7S"), c("AS"), Suit::Hearts);
    assert_eq!(out.winner, PairWinner::Second);
    assert_eq!(out.reason, WinReason::HigherRank);
    assert_eq!(round_points(&[c("7S"), c("AS")], 0), 21);
}

#[test]
fn low_trump_takes_king() {
    let out = resolve_pair(c("KD"), c("3C"), Suit::Clubs);
    assert_eq!(out.winner, PairWinner::Second);
    assert_eq!(round_points(&[c("KD"), c("3C")], 0), 4);
}

#[test]
fn four_player_trump_three_representative_earns_twenty() {
    let trump = Suit::Diamonds;
    let cards = [c("KS"), c("4S"), c("3D"), c("AS")];
    let plays: Vec<_> = cards
        .iter()
        .enumerate()
        .map(|(seat, &card)| (team_of(seat as u8, 4), card))
        .collect();
    let out = resolve_round(&plays, trump).unwrap();
    assert_eq!(out.winning_team, 0);
    assert_eq!(plays[out.winning_index].1, c("3D"));

    let winners: Vec<Card> = plays
        .iter()
        .filter(|(t, _)| *t == out.winning_team)
        .map(|&(_, card)| card)
        .collect();
    let raw = round_points(&cards, 0);
    let bonus = first_round_bonus(4, 1, &cards, &winners, out.reason, trump);
    assert_eq!(bonus, Some(FirstRoundBonus::TrumpThree));
    assert_eq!(raw + bonus.map_or(0, FirstRoundBonus::points), raw + 20);

    assert_eq!(first_round_bonus(4, 2, &cards, &winners, out.reason, trump), None);
}
