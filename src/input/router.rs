//! InputRouter: the input-polling activity.
//!
//! Runs on its own thread, decoupled in time from the render/tick loop. Each
//! iteration polls for one key event with a short timeout, maps it to a
//! [`GameAction`], debounces it, and applies it to the shared game state
//! under the mutex. Quit keys never touch game state; they raise the shared
//! shutdown flag and the loops wind down at their next boundary.
//!
//! Read failures are tolerated: a transient error is retried after a poll
//! interval, and only a sustained run of consecutive errors raises the input
//! warning flag that the view surfaces in-frame. The router itself never
//! terminates on I/O errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::app::{SharedGame, ShutdownFlag};
use crate::input::debounce::Debouncer;
use crate::input::map::{map_key_event, should_quit};
use crate::types::{GameAction, INPUT_POLL_MS};

/// Consecutive read failures before the input warning is raised.
const FAULT_THRESHOLD: u32 = 10;

/// Shared "input source is degraded" indicator.
///
/// Set by the router, read by the render loop, cleared when reads recover.
#[derive(Debug, Clone, Default)]
pub struct InputWarning(Arc<AtomicBool>);

impl InputWarning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn set(&self, raised: bool) {
        self.0.store(raised, Ordering::Relaxed);
    }
}

/// Translates key events into game state calls.
pub struct InputRouter {
    shared: SharedGame,
    shutdown: ShutdownFlag,
    warning: InputWarning,
    debouncer: Debouncer,
    consecutive_errors: u32,
    started: Instant,
}

impl InputRouter {
    pub fn new(shared: SharedGame, shutdown: ShutdownFlag, warning: InputWarning) -> Self {
        Self {
            shared,
            shutdown,
            warning,
            debouncer: Debouncer::new(),
            consecutive_errors: 0,
            started: Instant::now(),
        }
    }

    /// Spawn the polling thread.
    ///
    /// The thread exits once the shutdown flag is raised (observed within one
    /// poll interval).
    pub fn spawn(
        shared: SharedGame,
        shutdown: ShutdownFlag,
        warning: InputWarning,
    ) -> JoinHandle<()> {
        let router = Self::new(shared, shutdown, warning);
        thread::spawn(move || router.run())
    }

    fn run(mut self) {
        let poll_timeout = Duration::from_millis(INPUT_POLL_MS);

        while !self.shutdown.is_requested() {
            match event::poll(poll_timeout) {
                Ok(false) => {
                    self.note_read_ok();
                }
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        self.note_read_ok();
                        if key.kind != KeyEventKind::Release {
                            let now_ms = self.started.elapsed().as_millis() as u64;
                            self.handle_key(key, now_ms);
                        }
                    }
                    Ok(_) => {
                        // Resize, focus, paste: nothing to route. The render
                        // loop redraws full frames every tick anyway.
                        self.note_read_ok();
                    }
                    Err(_) => self.note_read_error(poll_timeout),
                },
                Err(_) => self.note_read_error(poll_timeout),
            }
        }
    }

    /// Route one key event observed at `now_ms` (milliseconds since the
    /// router started). Public so tests can drive the router without a
    /// terminal or a thread.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameAction> {
        if should_quit(key) {
            self.shutdown.request();
            return None;
        }

        let action = map_key_event(key)?;
        if !self.debouncer.accept(action, now_ms) {
            return None;
        }

        // Mutex poisoning means the tick loop panicked; there is no game
        // left to route into, so drop the action rather than propagate.
        if let Ok(mut state) = self.shared.lock() {
            state.apply_action(action);
        }
        Some(action)
    }

    fn note_read_ok(&mut self) {
        self.consecutive_errors = 0;
        self.warning.set(false);
    }

    fn note_read_error(&mut self, backoff: Duration) {
        self.consecutive_errors = self.consecutive_errors.saturating_add(1);
        if self.consecutive_errors >= FAULT_THRESHOLD {
            self.warning.set(true);
        }
        // Do not spin on a broken input source.
        thread::sleep(backoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::new_shared_game;
    use crate::types::{Direction, GameConfig, GameStatus};
    use crossterm::event::KeyCode;

    fn router_fixture() -> (InputRouter, SharedGame, ShutdownFlag, InputWarning) {
        let shared = new_shared_game(GameConfig {
            width: 12,
            height: 12,
            seed: 7,
            ..GameConfig::default()
        });
        let shutdown = ShutdownFlag::new();
        let warning = InputWarning::new();
        let router = InputRouter::new(shared.clone(), shutdown.clone(), warning.clone());
        (router, shared, shutdown, warning)
    }

    #[test]
    fn movement_key_updates_pending_direction() {
        let (mut router, shared, _, _) = router_fixture();

        let routed = router.handle_key(KeyEvent::from(KeyCode::Up), 0);
        assert_eq!(routed, Some(GameAction::MoveUp));
        assert_eq!(
            shared.lock().unwrap().pending_direction(),
            Direction::Up
        );
    }

    #[test]
    fn held_key_repeats_are_debounced() {
        let (mut router, _, _, _) = router_fixture();

        assert!(router.handle_key(KeyEvent::from(KeyCode::Up), 0).is_some());
        // Terminal auto-repeat at poll cadence: dropped inside the window.
        assert!(router.handle_key(KeyEvent::from(KeyCode::Up), 20).is_none());
        assert!(router.handle_key(KeyEvent::from(KeyCode::Up), 40).is_none());
        assert!(router.handle_key(KeyEvent::from(KeyCode::Up), 200).is_some());
    }

    #[test]
    fn quit_key_raises_shutdown_without_touching_state() {
        let (mut router, shared, shutdown, _) = router_fixture();
        let status_before = shared.lock().unwrap().status();

        assert!(router.handle_key(KeyEvent::from(KeyCode::Char('q')), 0).is_none());
        assert!(shutdown.is_requested());
        assert_eq!(shared.lock().unwrap().status(), status_before);
    }

    #[test]
    fn restart_key_is_routed_but_only_lands_at_game_over() {
        let (mut router, shared, _, _) = router_fixture();

        router.handle_key(KeyEvent::from(KeyCode::Char('r')), 0);
        assert_eq!(shared.lock().unwrap().episode_id(), 0);

        // Drive to game over, then restart (outside the toggle window).
        {
            let mut state = shared.lock().unwrap();
            while state.status() == GameStatus::Running {
                state.advance();
            }
        }
        router.handle_key(KeyEvent::from(KeyCode::Char('r')), 1_000);
        let state = shared.lock().unwrap();
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn sustained_errors_raise_warning_and_recovery_clears_it() {
        let (mut router, _, _, warning) = router_fixture();

        for _ in 0..FAULT_THRESHOLD {
            router.note_read_error(Duration::from_millis(0));
        }
        assert!(warning.is_raised());

        router.note_read_ok();
        assert!(!warning.is_raised());
    }
}
