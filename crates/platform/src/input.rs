//! Keyboard state tracking.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Tracks which keys are currently held.
///
/// The rig samples key state once per tick and repeats a command for as long
/// as its key is down, so only the held set matters; there is no per-frame
/// edge tracking.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press event.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        self.pressed_keys.insert(key);
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Release every key, e.g. when the window loses focus and release
    /// events would be missed.
    pub fn release_all(&mut self) {
        if !self.pressed_keys.is_empty() {
            tracing::debug!("Releasing {} held keys", self.pressed_keys.len());
        }
        self.pressed_keys.clear();
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if any key is pressed.
    pub fn any_pressed(&self) -> bool {
        !self.pressed_keys.is_empty()
    }
}
