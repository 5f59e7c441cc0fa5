//! Configuration file loading.
//!
//! Configuration lives in TOML files deserialized with serde. The helpers here
//! only deal with reading and parsing; each consumer validates its own values.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Parse a configuration value from a TOML string.
pub fn parse_toml<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(toml::from_str(source)?)
}

/// Load a configuration value from a TOML file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Toml`] if it
/// is not valid TOML for `T`.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let value = parse_toml(&source)?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(value)
}

/// Fail with [`Error::Config`] unless `condition` holds.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Config(message()))
    }
}
