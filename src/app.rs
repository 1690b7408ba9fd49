//! Application plumbing: shared state, shutdown signalling, and the
//! fixed-tick game loop.
//!
//! Two activities share one `GameState`: the input router (its own thread,
//! fast poll) and the game loop here (fixed tick). The whole state sits
//! behind a single mutex, so every public operation is atomic with respect
//! to the others; direction requests accepted before a tick's `advance()`
//! are visible to it, later ones wait for the next tick.
//!
//! The state is owned here and passed as a handle - there is no process-wide
//! singleton.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use crate::core::{GameSnapshot, GameState};
use crate::input::InputWarning;
use crate::term::{GameView, TerminalRenderer, Viewport};
use crate::types::GameConfig;

/// Handle to the mutex-guarded game state, shared between activities.
pub type SharedGame = Arc<Mutex<GameState>>;

/// Construct a shared game from a config.
pub fn new_shared_game(config: GameConfig) -> SharedGame {
    Arc::new(Mutex::new(GameState::new(config)))
}

/// Cooperative shutdown signal.
///
/// Raised by whoever wants the process to stop (normally the input router on
/// a quit key); each loop observes it at its next boundary and winds down.
/// It is never lowered.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The fixed-tick driver: advance, snapshot, render, sleep the remainder.
pub struct GameLoop {
    shared: SharedGame,
    shutdown: ShutdownFlag,
    warning: InputWarning,
    tick: Duration,
    view: GameView,
    snapshot: GameSnapshot,
}

impl GameLoop {
    pub fn new(
        shared: SharedGame,
        shutdown: ShutdownFlag,
        warning: InputWarning,
        tick_ms: u64,
    ) -> Self {
        Self {
            shared,
            shutdown,
            warning,
            tick: Duration::from_millis(tick_ms.max(1)),
            view: GameView::default(),
            snapshot: GameSnapshot::default(),
        }
    }

    /// One simulation step under the lock, leaving the frame in `snapshot`.
    ///
    /// `advance()` is a no-op unless the game is Running, so paused and
    /// game-over frames still refresh without moving the snake.
    pub fn step(&mut self) -> Result<()> {
        let mut state = self
            .shared
            .lock()
            .map_err(|_| anyhow!("game state mutex poisoned"))?;
        state.advance();
        state.snapshot_into(&mut self.snapshot);
        Ok(())
    }

    /// Run until shutdown is requested.
    ///
    /// Renders one frame per tick unconditionally - Running, Paused and
    /// GameOver all draw, with their overlays. Rendering happens outside the
    /// state lock.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        loop {
            let tick_started = Instant::now();

            if self.shutdown.is_requested() {
                return Ok(());
            }

            self.step()?;

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = self
                .view
                .render(&self.snapshot, Viewport::new(w, h), self.warning.is_raised());
            term.draw(&fb)?;

            // Sleep the remainder of the tick; rendering time is absorbed.
            let remainder = self
                .tick
                .checked_sub(tick_started.elapsed())
                .unwrap_or(Duration::ZERO);
            if !remainder.is_zero() {
                thread::sleep(remainder);
            }
        }
    }
}
