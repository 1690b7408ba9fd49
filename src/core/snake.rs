//! Snake module - the ordered body of the snake
//!
//! Segments are stored head-first: the head is the front element, the tail the
//! back. Advancing prepends a new head and pops the tail unless growth is
//! pending, so a non-eating step keeps the length constant.
//!
//! The snake itself never decides whether a step is legal; collision checks
//! live in `GameState`, which inspects the candidate head before committing.

use std::collections::VecDeque;

use crate::types::Position;

/// The snake body as an ordered, head-first sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
    grow_pending: bool,
}

impl Snake {
    /// Create a single-segment snake at the given cell.
    pub fn new(head: Position) -> Self {
        let mut segments = VecDeque::with_capacity(16);
        segments.push_front(head);
        Self {
            segments,
            grow_pending: false,
        }
    }

    pub fn head(&self) -> Position {
        // The deque is never empty: construction inserts a head and advance
        // only pops after pushing.
        *self.segments.front().unwrap()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate segments head-first.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// True if any segment occupies the given cell.
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Mark the next advance as growing (tail retained).
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Commit a step to `new_head`.
    ///
    /// Prepends the new head; pops and returns the vacated tail cell unless a
    /// growth was pending, in which case the length increases by one and
    /// `None` is returned.
    pub fn advance(&mut self, new_head: Position) -> Option<Position> {
        self.segments.push_front(new_head);
        if self.grow_pending {
            self.grow_pending = false;
            None
        } else {
            self.segments.pop_back()
        }
    }
}
