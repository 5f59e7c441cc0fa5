//! Rig configuration.

use std::path::Path;

use arena_core::config::ensure;
use arena_layout::{LayoutParams, StereoPriority};
use serde::{Deserialize, Serialize};

/// Smallest camera count a resize will produce.
pub const MIN_CAMERA_COUNT: u32 = 6;
/// Largest camera count a resize will produce.
pub const MAX_CAMERA_COUNT: u32 = 72;
/// Smallest camera count a configuration may start with.
pub const MIN_CONFIGURED_CAMERA_COUNT: u32 = 3;

/// Per-tick deltas applied while an adjustment key is held.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentSteps {
    /// Cameras added or removed per tick
    pub camera_count: u32,
    pub eye_separation: f32,
    pub viewer_height: f32,
}

impl Default for AdjustmentSteps {
    fn default() -> Self {
        Self {
            camera_count: 6,
            eye_separation: 0.05,
            viewer_height: 0.1,
        }
    }
}

/// Configuration of the camera ring.
///
/// Loaded once at startup; the rig manager mutates `camera_count`,
/// `eye_separation` and `viewer_height` as adjustments come in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub camera_count: u32,
    /// Yaw of the first sector in degrees
    pub rotation_offset: f32,
    /// Horizontal shift of the viewport slots, wrapping around the surface
    pub viewport_offset_h: f32,
    pub viewport_offset_v: f32,
    pub viewport_height: f32,
    pub screen_height: f32,
    pub screen_radius: f32,
    pub viewer_height: f32,
    pub near_clip_plane: f32,
    pub far_clip_plane: f32,
    /// Deactivate the scene's default camera on startup
    pub disable_main_camera: bool,
    pub estimate_view_frustum_on_cameras: bool,
    /// Let the off-axis projection place the near plane at the arena wall
    pub clip_to_arena: bool,
    pub use_stereo: bool,
    pub eye_separation: f32,
    /// Give right-eye cameras the same priority as their left eye
    pub symmetric_stereo_priority: bool,
    pub steps: AdjustmentSteps,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            camera_count: 6,
            rotation_offset: 210.0,
            viewport_offset_h: 0.0,
            viewport_offset_v: 0.0,
            viewport_height: 1.0,
            screen_height: 4.0,
            screen_radius: 4.9,
            viewer_height: 1.2,
            near_clip_plane: 0.3,
            far_clip_plane: 200.0,
            disable_main_camera: true,
            estimate_view_frustum_on_cameras: true,
            clip_to_arena: false,
            use_stereo: false,
            eye_separation: 0.05,
            symmetric_stereo_priority: false,
            steps: AdjustmentSteps::default(),
        }
    }
}

impl RigConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> arena_core::Result<Self> {
        let config: Self = arena_core::config::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration string.
    pub fn from_toml_str(source: &str) -> arena_core::Result<Self> {
        let config: Self = arena_core::config::parse_toml(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the static invariants of the configuration.
    ///
    /// The camera count is only held to the resize range once it changes at
    /// runtime; at startup anything from three cameras up is accepted.
    pub fn validate(&self) -> arena_core::Result<()> {
        ensure(self.camera_count >= MIN_CONFIGURED_CAMERA_COUNT, || {
            format!(
                "camera_count must be at least {}, got {}",
                MIN_CONFIGURED_CAMERA_COUNT, self.camera_count
            )
        })?;
        ensure(self.screen_radius > 0.0, || {
            format!("screen_radius must be positive, got {}", self.screen_radius)
        })?;
        ensure(self.screen_height > 0.0, || {
            format!("screen_height must be positive, got {}", self.screen_height)
        })?;
        ensure(
            self.viewport_height > 0.0 && self.viewport_height <= 1.0,
            || {
                format!(
                    "viewport_height must be in (0, 1], got {}",
                    self.viewport_height
                )
            },
        )?;
        ensure(
            self.near_clip_plane > 0.0 && self.near_clip_plane < self.far_clip_plane,
            || {
                format!(
                    "clip planes must satisfy 0 < near < far, got near {} far {}",
                    self.near_clip_plane, self.far_clip_plane
                )
            },
        )?;
        ensure(
            self.steps.eye_separation >= 0.0 && self.steps.viewer_height >= 0.0,
            || "adjustment steps must not be negative".to_string(),
        )?;
        Ok(())
    }

    /// Number of camera outputs the rig renders.
    pub fn output_count(&self) -> u32 {
        if self.use_stereo {
            2 * self.camera_count
        } else {
            self.camera_count
        }
    }

    /// Layout engine inputs for the current configuration.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            camera_count: self.camera_count,
            rotation_offset: self.rotation_offset,
            viewport_offset_h: self.viewport_offset_h,
            viewport_offset_v: self.viewport_offset_v,
            viewport_height: self.viewport_height,
            screen_height: self.screen_height,
            screen_radius: self.screen_radius,
            viewer_height: self.viewer_height,
            stereo: self.use_stereo,
            eye_separation: self.eye_separation,
            stereo_priority: if self.symmetric_stereo_priority {
                StereoPriority::Symmetric
            } else {
                StereoPriority::Legacy
            },
        }
    }
}

/// Clamp a requested camera count into the resize range.
pub fn clamp_camera_count(requested: i64) -> u32 {
    requested.clamp(MIN_CAMERA_COUNT as i64, MAX_CAMERA_COUNT as i64) as u32
}
