//! Mapping from held keys to rig commands.

use arena_rig::{CommandQueue, RigCommand};
use winit::keyboard::KeyCode;

use crate::input::InputState;

/// Keys bound to each rig command.
#[derive(Clone, Debug)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, RigCommand)>,
}

impl Default for KeyBindings {
    /// `-`/`+` change the camera count, `[`/`]` widen and narrow the eye
    /// separation, Page Up/Down raise and lower the viewer.
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Minus, RigCommand::DecreaseCount),
                (KeyCode::NumpadSubtract, RigCommand::DecreaseCount),
                (KeyCode::Equal, RigCommand::IncreaseCount),
                (KeyCode::NumpadAdd, RigCommand::IncreaseCount),
                (KeyCode::BracketLeft, RigCommand::IncreaseSeparation),
                (KeyCode::BracketRight, RigCommand::DecreaseSeparation),
                (KeyCode::PageUp, RigCommand::IncreaseHeight),
                (KeyCode::PageDown, RigCommand::DecreaseHeight),
            ],
        }
    }
}

impl KeyBindings {
    /// Bindings with no keys.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind another key to `command`.
    pub fn bind(&mut self, key: KeyCode, command: RigCommand) -> &mut Self {
        self.bindings.push((key, command));
        self
    }

    /// Queue the command of every bound key that is held.
    pub fn sample(&self, input: &InputState, queue: &mut CommandQueue) {
        queue.extend(
            self.bindings
                .iter()
                .filter(|(key, _)| input.is_key_pressed(*key))
                .map(|(_, command)| *command),
        );
    }
}
