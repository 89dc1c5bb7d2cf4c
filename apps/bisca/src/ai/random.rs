//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline implementation of
//! [`AiPlayer`](super::AiPlayer): it picks uniformly among the legal cards,
//! and is used as a sparring partner in simulations and tests.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::cards_logic::legal_response_indices;
use crate::domain::state::{GameState, Seat};
use crate::domain::Card;

/// AI that makes random legal moves.
///
/// ```rust,ignore
/// // Non-deterministic (uses system entropy)
/// let random_ai = RandomPlayer::new(None);
///
/// // Deterministic (uses seed for reproducible behavior)
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    rng: StdRng,
    seat: Option<Seat>,
    hand: Vec<Card>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomPlayer`; `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng,
            seat: None,
            hand: Vec::new(),
        }
    }

    fn pick(&mut self, candidates: &[usize]) -> Result<usize, AiError> {
        let seat = self.seat.ok_or(AiError::EngineNotInitialized)?;
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(AiError::EmptyHand { seat })
    }

    fn refresh(&mut self, state: &GameState, seat: Seat) -> Result<(), AiError> {
        let hand = state.hand(seat).map_err(|_| AiError::InvalidSeat(seat))?;
        self.hand = hand.to_vec();
        Ok(())
    }
}

impl AiPlayer for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(&mut self, state: &GameState, seat: Seat) -> Result<(), AiError> {
        self.refresh(state, seat)?;
        self.seat = Some(seat);
        Ok(())
    }

    fn choose_leading_card(&mut self) -> Result<usize, AiError> {
        let all: Vec<usize> = (0..self.hand.len()).collect();
        self.pick(&all)
    }

    fn choose_responding_card(&mut self, lead: Card) -> Result<usize, AiError> {
        // Choose from legal responses only, never from the raw hand
        let legal = legal_response_indices(&self.hand, lead.suit);
        self.pick(&legal)
    }

    fn update_memory(&mut self, state: &GameState) -> Result<(), AiError> {
        let seat = self.seat.ok_or(AiError::EngineNotInitialized)?;
        self.refresh(state, seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_serde::parse_card_token;
    use crate::domain::test_state_helpers::two_player_state;
    use crate::domain::Suit;

    #[test]
    fn requires_initialize() {
        let mut ai = RandomPlayer::new(Some(1));
        assert_eq!(ai.choose_leading_card(), Err(AiError::EngineNotInitialized));
    }

    #[test]
    fn follows_suit_when_able() {
        let state = two_player_state(&["3S", "AD", "KS", "4C"], &["7S"], Suit::Hearts);
        let lead = parse_card_token("7S").unwrap();
        for seed in 0..16 {
            let mut ai = RandomPlayer::new(Some(seed));
            ai.initialize(&state, 0).unwrap();
            let idx = ai.choose_responding_card(lead).unwrap();
            assert_eq!(state.players[0].hand[idx].suit, Suit::Spades);
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let state = two_player_state(&["3S", "AD", "KS", "4C"], &["7S"], Suit::Hearts);
        let pick = |seed| {
            let mut ai = RandomPlayer::new(Some(seed));
            ai.initialize(&state, 0).unwrap();
            ai.choose_leading_card().unwrap()
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn empty_hand_is_reported() {
        let state = two_player_state(&[], &["7S"], Suit::Hearts);
        let mut ai = RandomPlayer::new(Some(3));
        ai.initialize(&state, 0).unwrap();
        assert_eq!(ai.choose_leading_card(), Err(AiError::EmptyHand { seat: 0 }));
    }
}
