//! Terminal input layer.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values,
//! debounces held keys with explicit per-action timestamps, and runs the
//! polling thread that feeds the shared game state.

pub mod debounce;
pub mod map;
pub mod router;

pub use debounce::Debouncer;
pub use map::{map_key_event, should_quit};
pub use router::{InputRouter, InputWarning};
