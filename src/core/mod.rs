//! Core game logic - pure, deterministic, and testable
//!
//! Everything in this module is free of I/O and external dependencies:
//! the same seed and the same inputs produce the same game. The terminal
//! layers (`input`, `term`, `app`) drive it from the outside.
//!
//! - [`board`]: playfield geometry and the wall/interior classification
//! - [`snake`]: the ordered, head-first snake body
//! - [`rng`]: seeded LCG for reproducible food placement
//! - [`game_state`]: the authoritative model and all state transitions
//! - [`snapshot`]: the payload handed to the render sink each frame

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use board::Board;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
