// Input debounce for shell command keys
//
// Calculator keys (digits, operators, Enter, Esc, Backspace) go straight to
// the engine so fast typing is never dropped. Shell commands (quit, theme,
// copy, logs, help) trigger once per press: a held key does not repeat, and
// terminals that never send release events get a 150ms debounce instead.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a key that was never released
const DEBOUNCE: Duration = Duration::from_millis(150);

/// Input handler tracking when each command key last fired
#[derive(Default)]
pub struct InputHandler {
    /// Keys currently held, with the time they last triggered
    held: HashMap<KeyCode, Instant>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        match self.held.get_mut(&key) {
            Some(last) if now.duration_since(*last) < DEBOUNCE => false,
            Some(last) => {
                *last = now;
                true
            }
            None => {
                self.held.insert(key, now);
                true
            }
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}
