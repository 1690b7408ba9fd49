//! Snapshot module - the render-sink payload
//!
//! A `GameSnapshot` is everything a renderer needs for one full frame. The
//! game loop keeps a single snapshot alive and refills it under the state
//! mutex each tick (`GameState::snapshot_into`), so rendering happens outside
//! the lock and steady-state frames reuse the segment allocation.

use crate::types::{Direction, GameStatus, Position};

/// One frame's worth of game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board width in cells, border included.
    pub width: i16,
    /// Board height in cells, border included.
    pub height: i16,
    /// Snake segments, head first.
    pub snake: Vec<Position>,
    /// Current food cell.
    pub food: Position,
    /// Direction committed by the last advance.
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    /// Increments on every reset.
    pub episode_id: u32,
    /// Ticks advanced in the current episode.
    pub tick_count: u64,
}

impl GameSnapshot {
    /// Reset to an inert value, retaining the segment allocation.
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.snake.clear();
        self.food = Position::new(0, 0);
        self.direction = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Running;
        self.episode_id = 0;
        self.tick_count = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            snake: Vec::new(),
            food: Position::new(0, 0),
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Running,
            episode_id: 0,
            tick_count: 0,
        }
    }
}
