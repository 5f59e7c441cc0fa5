//! Rig manager for the cylindrical arena.
//!
//! This crate turns layout engine output into scene entities and keeps them in
//! step with live adjustments:
//! - [`RigConfig`] with serde-backed loading and validation
//! - [`RigManager`] owning the camera and screen slots
//! - [`RigCommand`] and [`CommandQueue`] for per-tick adjustments

pub mod command;
pub mod config;
pub mod manager;
pub mod slot;

pub use command::{CommandQueue, RigCommand};
pub use config::{AdjustmentSteps, MAX_CAMERA_COUNT, MIN_CAMERA_COUNT, RigConfig};
pub use manager::{RigAnchor, RigManager};
pub use slot::{CameraSlot, ScreenSlot};
