//! Terminal Snake.
//!
//! The deterministic game model lives in [`core`]; [`input`] and [`term`]
//! are the crossterm-facing edges, and [`app`] wires them together around a
//! shared, mutex-guarded game state.

pub mod app;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
