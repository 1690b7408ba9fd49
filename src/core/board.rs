//! Board module - playfield geometry
//!
//! The board is a W x H grid whose outermost ring of cells is the wall.
//! Coordinates: (x, y) with x ranging 0..W-1 (left to right) and y ranging
//! 0..H-1 (top to bottom). The playable interior is [1, W-2] x [1, H-2].
//!
//! Unlike a block-stacking playfield there is no per-cell storage: the only
//! occupied cells are the snake's segments and the food, and both live in
//! `GameState`. The board only answers geometric questions.

use crate::types::Position;

/// Smallest sensible board edge: a 1-cell border around a 3x3 interior.
pub const MIN_BOARD_EDGE: i16 = 5;

/// Playfield geometry, immutable for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i16,
    height: i16,
}

impl Board {
    /// Create a board with the given outer dimensions.
    ///
    /// Dimensions below [`MIN_BOARD_EDGE`] are clamped up so the interior is
    /// never empty and the center spawn always lands inside it.
    pub fn new(width: i16, height: i16) -> Self {
        Self {
            width: width.max(MIN_BOARD_EDGE),
            height: height.max(MIN_BOARD_EDGE),
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// The spawn cell at the middle of the board.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// True if the position lies on or outside the wall ring.
    ///
    /// This is the wall-collision predicate: x <= 0, x >= W-1, y <= 0 or
    /// y >= H-1 all count as hitting the wall.
    pub fn hits_wall(&self, pos: Position) -> bool {
        pos.x <= 0 || pos.x >= self.width - 1 || pos.y <= 0 || pos.y >= self.height - 1
    }

    /// True if the position is strictly inside the wall ring.
    pub fn is_interior(&self, pos: Position) -> bool {
        !self.hits_wall(pos)
    }

    /// Number of playable interior cells.
    pub fn interior_cell_count(&self) -> usize {
        ((self.width - 2) as usize) * ((self.height - 2) as usize)
    }

    /// The n-th interior cell in row-major order, n in 0..interior_cell_count().
    ///
    /// Gives food generation a stable enumeration of the interior so a
    /// uniform draw over free cells stays allocation-free.
    pub fn interior_cell(&self, n: usize) -> Position {
        let interior_w = (self.width - 2) as usize;
        let x = (n % interior_w) as i16 + 1;
        let y = (n / interior_w) as i16 + 1;
        Position::new(x, y)
    }
}
