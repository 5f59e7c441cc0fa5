//! Platform layer for the arena rig.
//!
//! This crate provides platform-specific functionality:
//! - Output window management via winit
//! - Level-triggered keyboard state
//! - Key bindings that turn held keys into rig commands

mod bindings;
mod input;
mod window;

pub use bindings::KeyBindings;
pub use input::{InputState, KeyCode};
pub use window::{Window, WindowConfig};

// Re-export winit types that users might need
pub use winit::event::{Event, WindowEvent};
pub use winit::event_loop::EventLoop;
