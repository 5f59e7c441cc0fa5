//! Error types for the arena rig.

use thiserror::Error;

/// Main error type for the arena rig.
///
/// Rig and layout operations never fail; errors come from loading
/// configuration and from the platform layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration values that violate a static invariant
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using the rig's Error type.
pub type Result<T> = std::result::Result<T, Error>;
