use crate::domain::rules::team_of;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type Seat = u8;
pub type PlayerId = u8; // positional alias for Seat
pub type TeamId = u8;

/// One seat at the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards in hand, in the order they were received.
    pub hand: Vec<Card>,
    /// Cards won in rounds taken by this seat.
    pub collected: Vec<Card>,
    pub score: i16,
}

impl Player {
    pub fn with_hand(hand: Vec<Card>) -> Self {
        Self {
            hand,
            ..Self::default()
        }
    }
}

/// A completed round as the caller recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round_no: u16,
    pub leader_seat: Seat,
    /// Plays in order, leader first.
    pub plays: Vec<(Seat, Card)>,
    /// `None` for a void round whose points were carried over.
    pub winner: Option<Seat>,
    /// Carried-over stake that was on the table when the round started.
    pub stake_at_time: u16,
    pub points: u16,
}

impl RoundRecord {
    pub fn leader_card(&self) -> Option<Card> {
        self.plays.first().map(|&(_, c)| c)
    }

    /// First card played in answer to the lead.
    pub fn responder_card(&self) -> Option<Card> {
        self.plays.get(1).map(|&(_, c)| c)
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.leader_card().map(|c| c.suit)
    }
}

/// Entire match container, owned and mutated by the caller.
///
/// The core reads it; it never changes it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub trump: Suit,
    /// Players indexed by seat.
    pub players: Vec<Player>,
    /// Seat expected to act next.
    pub current_seat: Seat,
    /// Cards of the round in progress, in play order.
    pub cards_on_table: Vec<Card>,
    /// Points carried over from a void round.
    pub round_stake: u16,
    pub round_history: Vec<RoundRecord>,
    /// 1-based number of the round in progress.
    pub current_round: u16,
    pub total_rounds: u16,
    pub draw_pile: Vec<Card>,
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn require_seat(&self, seat: Seat) -> Result<&Player, DomainError> {
        self.players
            .get(seat as usize)
            .ok_or(DomainError::InvalidSeat(seat))
    }

    pub fn hand(&self, seat: Seat) -> Result<&[Card], DomainError> {
        self.require_seat(seat).map(|p| p.hand.as_slice())
    }

    pub fn team_of(&self, seat: Seat) -> TeamId {
        team_of(seat, self.player_count())
    }

    pub fn team_score(&self, team: TeamId) -> i16 {
        self.players
            .iter()
            .enumerate()
            .filter(|(seat, _)| self.team_of(*seat as Seat) == team)
            .map(|(_, p)| p.score)
            .sum()
    }

    /// Own team's score minus the best opposing team's score.
    pub fn score_differential(&self, seat: Seat) -> i16 {
        let mine = self.team_of(seat);
        let own = self.team_score(mine);
        let best_other = (0..self.player_count())
            .map(|s| self.team_of(s as Seat))
            .filter(|&t| t != mine)
            .map(|t| self.team_score(t))
            .max()
            .unwrap_or(0);
        own - best_other
    }

    /// Round progress in [0, 1]: completed rounds over total rounds.
    pub fn round_progress(&self) -> f64 {
        if self.total_rounds == 0 {
            return 0.0;
        }
        let done = self.current_round.saturating_sub(1);
        (f64::from(done) / f64::from(self.total_rounds)).clamp(0.0, 1.0)
    }

    /// Every card already revealed: history plus the table.
    pub fn cards_played(&self) -> impl Iterator<Item = Card> + '_ {
        self.round_history
            .iter()
            .flat_map(|r| r.plays.iter().map(|&(_, c)| c))
            .chain(self.cards_on_table.iter().copied())
    }

    /// Cards held by seats outside `seat`'s team.
    pub fn opponent_cards_held(&self, seat: Seat) -> usize {
        let mine = self.team_of(seat);
        self.players
            .iter()
            .enumerate()
            .filter(|(s, _)| self.team_of(*s as Seat) != mine)
            .map(|(_, p)| p.hand.len())
            .sum()
    }
}
