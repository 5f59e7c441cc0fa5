//! Application settings file.

use std::path::Path;

use arena_platform::WindowConfig;
use arena_rig::RigConfig;
use serde::{Deserialize, Serialize};

/// Everything read from the settings file: a `[window]` table and a `[rig]`
/// table (with an optional `[rig.steps]`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,
    pub rig: RigConfig,
}

impl Settings {
    /// Load settings from `path`, or use the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> arena_core::Result<Self> {
        match path {
            Some(path) => arena_core::config::load_toml(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides, then validate the rig configuration.
    pub fn finish(mut self, stereo: bool, cameras: Option<u32>) -> arena_core::Result<Self> {
        if stereo {
            self.rig.use_stereo = true;
        }
        if let Some(count) = cameras {
            self.rig.camera_count = count;
        }
        self.rig.validate()?;
        Ok(self)
    }
}
