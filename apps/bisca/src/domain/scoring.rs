//! Round point accounting.

use crate::domain::cards_logic::card_points;
use crate::domain::rules::is_team_match;
use crate::domain::tricks::WinReason;
use crate::domain::{Card, Rank, Suit};

pub const TRUMP_THREE_BONUS: u16 = 20;
pub const RANK_SUPERIORITY_BONUS: u16 = 10;

/// First-round bonus awarded in team matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstRoundBonus {
    /// The winning team's contribution included the trump 3.
    TrumpThree,
    /// No trump was played and the round went by rank alone.
    RankSuperiority,
}

impl FirstRoundBonus {
    pub fn points(self) -> u16 {
        match self {
            FirstRoundBonus::TrumpThree => TRUMP_THREE_BONUS,
            FirstRoundBonus::RankSuperiority => RANK_SUPERIORITY_BONUS,
        }
    }
}

/// Decide the first-round bonus, if any.
///
/// Only team matches (4 or 6 players) in round 1 qualify.
pub fn first_round_bonus(
    players: usize,
    round_no: u16,
    played: &[Card],
    winning_team_cards: &[Card],
    reason: WinReason,
    trump: Suit,
) -> Option<FirstRoundBonus> {
    if !is_team_match(players) || round_no != 1 {
        return None;
    }
    let trump_three = Card::new(trump, Rank::Three);
    if winning_team_cards.contains(&trump_three) {
        return Some(FirstRoundBonus::TrumpThree);
    }
    let any_trump = played.iter().any(|c| c.suit == trump);
    if !any_trump && reason == WinReason::HigherRank {
        return Some(FirstRoundBonus::RankSuperiority);
    }
    None
}

/// Raw card points of the round plus the carried stake.
pub fn round_points(played: &[Card], round_stake: u16) -> u16 {
    card_points(played) + round_stake
}
