//! Terminal Snake runner.
//!
//! Wires the shared game state to the input router thread and the fixed-tick
//! render loop, and keeps terminal restoration on every exit path. A normal
//! quit exits 0; internal faults propagate as errors and exit non-zero.

use anyhow::Result;

use tui_snake::app::{new_shared_game, GameLoop, ShutdownFlag};
use tui_snake::input::{InputRouter, InputWarning};
use tui_snake::term::TerminalRenderer;
use tui_snake::types::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::default();

    let shared = new_shared_game(config);
    let shutdown = ShutdownFlag::new();
    let warning = InputWarning::new();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let input = InputRouter::spawn(shared.clone(), shutdown.clone(), warning.clone());

    let mut game_loop = GameLoop::new(shared, shutdown.clone(), warning, config.tick_ms);
    let result = game_loop.run(&mut term);

    // Stop the input thread and always try to restore terminal state,
    // whether we are exiting cleanly or propagating an error.
    shutdown.request();
    let _ = input.join();
    let _ = term.exit();

    result
}
