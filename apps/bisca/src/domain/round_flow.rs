//! Caller-side state transitions for one round.
//!
//! The decision core only reads `GameState`; these helpers are how a caller
//! (the simulator, tests) applies plays and round results to its own copy.

use crate::domain::cards_logic::legal_response_indices;
use crate::domain::rules::{next_seat, seats_from};
use crate::domain::state::{GameState, RoundRecord, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Seat that led the round currently on the table.
pub fn round_leader(state: &GameState) -> Seat {
    let players = state.player_count().max(1);
    let back = state.cards_on_table.len() % players;
    ((state.current_seat as usize + players - back) % players) as Seat
}

/// Plays on the table so far, leader first.
pub fn table_plays(state: &GameState) -> Vec<(Seat, Card)> {
    let players = state.player_count();
    seats_from(round_leader(state), players)
        .zip(state.cards_on_table.iter().copied())
        .collect()
}

/// Move the card at `hand_index` from `seat`'s hand onto the table.
///
/// Enforces turn order, the hand bounds, and the follow-suit rule.
pub fn play_card(state: &mut GameState, seat: Seat, hand_index: usize) -> Result<Card, DomainError> {
    state.require_seat(seat)?;
    if seat != state.current_seat {
        return Err(DomainError::IllegalPlay {
            seat,
            detail: format!("out of turn, seat {} to play", state.current_seat),
        });
    }
    if state.cards_on_table.len() >= state.player_count() {
        return Err(DomainError::IllegalPlay {
            seat,
            detail: "round already complete".into(),
        });
    }
    let lead = state.cards_on_table.first().map(|c| c.suit);
    let hand = &mut state.players[seat as usize].hand;
    if hand_index >= hand.len() {
        return Err(DomainError::IllegalPlay {
            seat,
            detail: format!("hand index {hand_index} out of range"),
        });
    }
    if let Some(lead) = lead {
        if !legal_response_indices(hand, lead).contains(&hand_index) {
            return Err(DomainError::IllegalPlay {
                seat,
                detail: format!("must follow {lead}"),
            });
        }
    }
    let card = hand.remove(hand_index);
    state.cards_on_table.push(card);
    state.current_seat = next_seat(seat, state.player_count());
    Ok(card)
}

/// Close the round on the table.
///
/// `winner` takes the cards and `points`; `None` makes the round void and
/// carries `points` as the stake of the next round. Cards are then drawn
/// one per seat starting with the winner (the leader on a void round),
/// and the winner leads next.
pub fn complete_round(
    state: &mut GameState,
    winner: Option<Seat>,
    points: u16,
) -> Result<RoundRecord, DomainError> {
    let players = state.player_count();
    if state.cards_on_table.len() != players {
        return Err(DomainError::malformed(
            players,
            state.cards_on_table.len(),
            "round is not complete",
        ));
    }
    if let Some(w) = winner {
        state.require_seat(w)?;
    }
    let leader = round_leader(state);
    let plays = table_plays(state);
    let cards = std::mem::take(&mut state.cards_on_table);

    let record = RoundRecord {
        round_no: state.current_round,
        leader_seat: leader,
        plays,
        winner,
        stake_at_time: state.round_stake,
        points,
    };

    match winner {
        Some(w) => {
            let player = &mut state.players[w as usize];
            player.score += points as i16;
            player.collected.extend(cards);
            state.round_stake = 0;
        }
        None => state.round_stake = points,
    }

    let first = winner.unwrap_or(leader);
    for seat in seats_from(first, players) {
        if let Some(card) = state.draw_pile.pop() {
            state.players[seat as usize].hand.push(card);
        }
    }

    state.round_history.push(record.clone());
    state.current_seat = first;
    state.current_round = state.current_round.saturating_add(1);
    Ok(record)
}

/// Every card has been played.
pub fn match_over(state: &GameState) -> bool {
    state.draw_pile.is_empty()
        && state.cards_on_table.is_empty()
        && state.players.iter().all(|p| p.hand.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_serde::parse_card_token;
    use crate::domain::test_state_helpers::two_player_state;
    use crate::domain::Suit;

    fn c(token: &str) -> Card {
        parse_card_token(token).unwrap()
    }

    #[test]
    fn play_enforces_turn_and_suit() {
        let mut state = two_player_state(&["7S", "3D"], &["AS", "4H"], Suit::Hearts);
        assert!(matches!(
            play_card(&mut state, 1, 0),
            Err(DomainError::IllegalPlay { seat: 1, .. })
        ));
        assert_eq!(play_card(&mut state, 0, 0).unwrap(), c("7S"));
        // Holding a spade, seat 1 may not play the heart.
        assert!(play_card(&mut state, 1, 1).is_err());
        assert_eq!(play_card(&mut state, 1, 0).unwrap(), c("AS"));
        assert_eq!(table_plays(&state), vec![(0, c("7S")), (1, c("AS"))]);
        assert_eq!(round_leader(&state), 0);
    }

    #[test]
    fn complete_round_scores_and_draws_winner_first() {
        let mut state = two_player_state(&["7S"], &["AS"], Suit::Hearts);
        state.draw_pile = vec![c("3C"), c("4C")];
        play_card(&mut state, 0, 0).unwrap();
        play_card(&mut state, 1, 0).unwrap();
        let record = complete_round(&mut state, Some(1), 21).unwrap();

        assert_eq!(record.leader_seat, 0);
        assert_eq!(record.winner, Some(1));
        assert_eq!(state.players[1].score, 21);
        assert_eq!(state.players[1].collected.len(), 2);
        assert_eq!(state.players[1].hand, vec![c("4C")]);
        assert_eq!(state.players[0].hand, vec![c("3C")]);
        assert_eq!(state.current_seat, 1);
        assert_eq!(state.current_round, 2);
        assert_eq!(state.round_history.len(), 1);
    }

    #[test]
    fn void_round_carries_stake() {
        let mut state = two_player_state(&["7S"], &["AS"], Suit::Hearts);
        play_card(&mut state, 0, 0).unwrap();
        play_card(&mut state, 1, 0).unwrap();
        complete_round(&mut state, None, 21).unwrap();
        assert_eq!(state.round_stake, 21);
        assert_eq!(state.current_seat, 0);
        assert!(match_over(&state));
    }

    #[test]
    fn incomplete_round_is_rejected() {
        let mut state = two_player_state(&["7S"], &["AS"], Suit::Hearts);
        play_card(&mut state, 0, 0).unwrap();
        assert!(complete_round(&mut state, Some(0), 10).is_err());
    }
}
