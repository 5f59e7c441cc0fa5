//! Camera and screen slots owned by the rig manager.

use arena_layout::Eye;
use arena_scene::{CameraSettings, EntityHandle, OffAxisParams, Transform};

/// One screen proxy plane on the arena wall.
///
/// Shared by both eyes of its sector in stereo.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenSlot {
    /// Sector index
    pub index: u32,
    pub entity: EntityHandle,
    pub transform: Transform,
    /// Chord width of the sector in world units
    pub width: f32,
    pub height: f32,
}

/// One rig camera and everything handed to the scene for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSlot {
    /// Position in the rig's camera list; creation and render order
    pub index: usize,
    /// Sector the camera looks into, also the index of its screen slot
    pub sector: u32,
    pub eye: Eye,
    pub entity: EntityHandle,
    pub transform: Transform,
    pub settings: CameraSettings,
    pub projection: OffAxisParams,
}

impl CameraSlot {
    /// Screen plane the camera's projection is fitted to.
    pub fn screen(&self) -> EntityHandle {
        self.projection.screen
    }
}
