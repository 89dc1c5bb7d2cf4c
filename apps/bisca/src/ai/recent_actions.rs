//! Fixed-capacity record of recently observed opponent actions.

use std::collections::VecDeque;

use crate::domain::Card;

pub const RECENT_ACTIONS_CAPACITY: usize = 10;

/// Whether a play opened the round or answered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Leader,
    Responder,
}

/// Situation an observed card was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub role: Role,
    pub round_no: u16,
    /// Carried stake plus the points the other seats put into the round.
    pub stake: u16,
    pub is_trump: bool,
    /// `None` for leads.
    pub followed_suit: Option<bool>,
    /// The opponent's team score minus the engine's team score.
    pub score_differential: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedAction {
    pub card: Card,
    pub context: ActionContext,
    /// Observation counter, monotonic per memory.
    pub timestamp: u64,
}

/// Bounded FIFO: pushing into a full buffer evicts the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Push an item, returning the evicted one when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

pub type RecentActions = RingBuffer<ObservedAction>;

impl Default for RecentActions {
    fn default() -> Self {
        RingBuffer::new(RECENT_ACTIONS_CAPACITY)
    }
}
