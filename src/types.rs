//! Shared types module - plain data structures and default constants
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from any layer (core logic, input mapping, rendering, tests).
//!
//! # Default Game Parameters
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 40 | Board columns including the border |
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Board rows including the border |
//! | `DEFAULT_TICK_MS` | 150 | Fixed simulation step interval |
//! | `DEFAULT_FOOD_SCORE` | 10 | Points awarded per food consumed |
//! | `INPUT_POLL_MS` | 20 | Key event poll timeout on the input thread |
//! | `DIRECTION_DEBOUNCE_MS` | 150 | Minimum gap between accepted direction requests per key |
//! | `TOGGLE_DEBOUNCE_MS` | 300 | Minimum gap between accepted pause/restart presses |
//!
//! All gameplay parameters are carried in [`GameConfig`]; the constants above
//! are only its defaults.

/// Default board width in cells, border included.
pub const DEFAULT_BOARD_WIDTH: i16 = 40;

/// Default board height in cells, border included.
pub const DEFAULT_BOARD_HEIGHT: i16 = 20;

/// Default fixed tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 150;

/// Default score awarded per food consumed.
pub const DEFAULT_FOOD_SCORE: u32 = 10;

/// Poll timeout for the input thread in milliseconds.
///
/// Short enough to observe shutdown promptly, long enough to keep the thread
/// mostly asleep.
pub const INPUT_POLL_MS: u64 = 20;

/// Debounce window for directional keys in milliseconds.
///
/// A held key accepts at most one request per tick period, so repeats cannot
/// outpace the simulation.
pub const DIRECTION_DEBOUNCE_MS: u64 = 150;

/// Debounce window for toggle keys (pause, restart) in milliseconds.
pub const TOGGLE_DEBOUNCE_MS: u64 = 300;

/// A cell coordinate on the board.
///
/// `x` grows rightward (0..width), `y` grows downward (0..height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The position one step away in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The four movement directions.
///
/// Stored as a unit enum rather than a raw vector pair so a half-updated
/// direction can never be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction, (dx, dy).
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact inverse of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake::types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

}

/// Lifecycle state of a game.
///
/// Transitions: Running ⇄ Paused (toggle), Running → GameOver (collision or
/// board-full), GameOver → Running (explicit reset only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Game actions produced by the input layer and consumed by the core.
///
/// Quit is deliberately not an action: shutdown is an application concern and
/// never touches game state (see `input::map::should_quit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Request the snake to head up on the next tick.
    MoveUp,
    /// Request the snake to head down on the next tick.
    MoveDown,
    /// Request the snake to head left on the next tick.
    MoveLeft,
    /// Request the snake to head right on the next tick.
    MoveRight,
    /// Toggle Running ⇄ Paused.
    Pause,
    /// Restart the game; only honored when the game is over.
    Restart,
}

impl GameAction {
    /// The direction this action requests, if it is a movement action.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Pause | GameAction::Restart => None,
        }
    }
}

/// Gameplay parameters.
///
/// The core never reads the default constants directly; everything flows
/// through this struct so boards, speeds and rewards stay configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in cells, border included. Minimum 5 (3 interior columns).
    pub width: i16,
    /// Board height in cells, border included. Minimum 5 (3 interior rows).
    pub height: i16,
    /// Fixed tick interval in milliseconds.
    pub tick_ms: u64,
    /// Score awarded per food consumed.
    pub food_score: u32,
    /// Seed for the food placement RNG.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            food_score: DEFAULT_FOOD_SCORE,
            seed: 1,
        }
    }
}
