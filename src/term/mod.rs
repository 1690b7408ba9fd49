//! Terminal rendering layer.
//!
//! The view renders game snapshots into a plain framebuffer (pure, testable);
//! the renderer is the only place that talks to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
