//! Debouncing for held keys.
//!
//! Terminals report a held key as a stream of repeated press events, and not
//! every terminal emits release events. Instead of sleeping between reads
//! (which gates correctness on wall-clock timing), the debouncer keeps an
//! explicit last-accepted timestamp per action and drops repeats that arrive
//! inside that action's window. Timestamps are supplied by the caller, so
//! the policy is fully deterministic under test.
//!
//! Two windows: directional keys may not outpace the tick cadence, and
//! toggle keys (pause, restart) get a longer window so one physical press
//! held across several polls cannot double-toggle.

use crate::types::{GameAction, DIRECTION_DEBOUNCE_MS, TOGGLE_DEBOUNCE_MS};

const ACTION_SLOTS: usize = 6;

fn slot(action: GameAction) -> usize {
    match action {
        GameAction::MoveUp => 0,
        GameAction::MoveDown => 1,
        GameAction::MoveLeft => 2,
        GameAction::MoveRight => 3,
        GameAction::Pause => 4,
        GameAction::Restart => 5,
    }
}

/// Per-action press debouncer with caller-supplied time.
#[derive(Debug, Clone)]
pub struct Debouncer {
    direction_window_ms: u64,
    toggle_window_ms: u64,
    last_accepted_ms: [Option<u64>; ACTION_SLOTS],
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_windows(DIRECTION_DEBOUNCE_MS, TOGGLE_DEBOUNCE_MS)
    }

    pub fn with_windows(direction_window_ms: u64, toggle_window_ms: u64) -> Self {
        Self {
            direction_window_ms,
            toggle_window_ms,
            last_accepted_ms: [None; ACTION_SLOTS],
        }
    }

    /// Decide whether a press of `action` observed at `now_ms` passes.
    ///
    /// Accepting records the timestamp; rejected presses leave the window
    /// anchored at the previous acceptance. Each action debounces
    /// independently, so alternating between two direction keys is never
    /// penalized.
    pub fn accept(&mut self, action: GameAction, now_ms: u64) -> bool {
        let window = match action {
            GameAction::Pause | GameAction::Restart => self.toggle_window_ms,
            _ => self.direction_window_ms,
        };

        let idx = slot(action);
        if let Some(last) = self.last_accepted_ms[idx] {
            if now_ms.saturating_sub(last) < window {
                return false;
            }
        }
        self.last_accepted_ms[idx] = Some(now_ms);
        true
    }

    /// Forget all acceptance history.
    pub fn reset(&mut self) {
        self.last_accepted_ms = [None; ACTION_SLOTS];
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
