//! Core utilities shared by the arena rig crates.
//!
//! This crate provides foundational types and utilities used across the workspace:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame clock for the per-tick update loop
//! - Configuration file loading

pub mod config;
mod error;
mod logging;
mod timer;

pub use error::{Error, Result};
pub use logging::init_logging;
pub use timer::FrameClock;
