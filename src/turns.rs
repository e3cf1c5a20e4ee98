use std::collections::VecDeque;

use crate::grid::Direction;

/// Most key presses a player can land between two ticks.
pub const TURN_QUEUE_CAPACITY: usize = 3;

/// Pending direction requests, oldest first. Requests arriving while the
/// queue is full are dropped.
#[derive(Clone, Debug)]
pub struct TurnQueue {
    pending: VecDeque<Direction>,
}

impl Default for TurnQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnQueue {
    pub fn new() -> Self {
        TurnQueue {
            pending: VecDeque::with_capacity(TURN_QUEUE_CAPACITY),
        }
    }

    /// Returns `false` when the request was dropped.
    pub fn push(&mut self, dir: Direction) -> bool {
        if self.pending.len() < TURN_QUEUE_CAPACITY {
            self.pending.push_back(dir);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// A snake may turn or keep going, but never reverse onto its own neck.
pub fn can_change_direction(old: Direction, new: Direction) -> bool {
    new != old.opposite()
}
