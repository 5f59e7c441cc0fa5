//! Layout engine for a ring of off-axis cameras around a cylindrical screen.
//!
//! This crate is pure geometry. Given the ring parameters it computes, for
//! every sector:
//! - the transform of the screen proxy plane on the arena wall
//! - the transform of the viewer camera (one, or a left/right pair in stereo)
//! - the camera's rectangle of the shared output surface and its render priority
//!
//! It never touches a scene; the rig manager turns a [`RigLayout`] into
//! entities.
//!
//! # Example
//!
//! ```
//! use arena_layout::{LayoutParams, compute_layout};
//!
//! let layout = compute_layout(&LayoutParams {
//!     camera_count: 6,
//!     ..LayoutParams::default()
//! });
//! assert_eq!(layout.screens.len(), 6);
//! assert_eq!(layout.cameras.len(), 6);
//! ```

pub mod geometry;
pub mod placement;
pub mod viewport;

use arena_scene::{Transform, ViewportRect};

pub use geometry::{SectorGeometry, sector_angle};
pub use placement::{
    PLANE_TEMPLATE_SIZE, Placement, camera_placement, plane_template_rotation, screen_placement,
    sector_yaw,
};
pub use viewport::{Eye, StereoPriority, render_priority, viewport_rect};

/// Inputs of a full layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub camera_count: u32,
    /// Yaw of sector 0 in degrees
    pub rotation_offset: f32,
    pub viewport_offset_h: f32,
    pub viewport_offset_v: f32,
    pub viewport_height: f32,
    pub screen_height: f32,
    pub screen_radius: f32,
    pub viewer_height: f32,
    pub stereo: bool,
    /// Lateral offset of each eye from the sector's viewing position
    pub eye_separation: f32,
    pub stereo_priority: StereoPriority,
}

impl Default for LayoutParams {
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
            stereo: false,
            eye_separation: 0.05,
            stereo_priority: StereoPriority::Legacy,
        }
    }
}

/// Computed placement of one screen plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub sector: u32,
    pub transform: Transform,
    pub yaw_degrees: f32,
}

/// Computed placement and output settings of one camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraLayout {
    pub sector: u32,
    pub eye: Eye,
    pub transform: Transform,
    pub yaw_degrees: f32,
    pub viewport: ViewportRect,
    pub priority: i32,
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RigLayout {
    pub geometry: SectorGeometry,
    /// One per sector, in sector order
    pub screens: Vec<ScreenLayout>,
    /// One per sector in mono; left/right pairs per sector in stereo
    pub cameras: Vec<CameraLayout>,
}

impl RigLayout {
    /// Cameras looking through the screen of `sector`.
    pub fn cameras_for(&self, sector: u32) -> impl Iterator<Item = &CameraLayout> {
        self.cameras.iter().filter(move |c| c.sector == sector)
    }
}

/// Compute the whole ring.
pub fn compute_layout(params: &LayoutParams) -> RigLayout {
    let n = params.camera_count;
    let geometry = SectorGeometry::compute(n, params.screen_radius, params.screen_height);
    let eyes: &[Eye] = if params.stereo {
        &[Eye::Left, Eye::Right]
    } else {
        &[Eye::Mono]
    };

    let mut screens = Vec::with_capacity(n as usize);
    let mut cameras = Vec::with_capacity(n as usize * eyes.len());

    for sector in 0..n {
        let screen = screen_placement(sector, n, params.rotation_offset, &geometry);
        screens.push(ScreenLayout {
            sector,
            transform: screen.transform,
            yaw_degrees: screen.yaw_degrees,
        });

        for &eye in eyes {
            let camera = camera_placement(
                sector,
                n,
                params.rotation_offset,
                params.viewer_height,
                eye.lateral_sign() * params.eye_separation,
            );
            cameras.push(CameraLayout {
                sector,
                eye,
                transform: camera.transform,
                yaw_degrees: camera.yaw_degrees,
                viewport: viewport_rect(
                    sector,
                    n,
                    params.viewport_offset_h,
                    params.viewport_offset_v,
                    params.viewport_height,
                    eye,
                ),
                priority: render_priority(sector, n, eye, params.stereo_priority),
            });
        }
    }

    RigLayout {
        geometry,
        screens,
        cameras,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_counts() {
        for n in [6, 12, 72] {
            let layout = compute_layout(&LayoutParams {
                camera_count: n,
                ..LayoutParams::default()
            });
            assert_eq!(layout.screens.len(), n as usize);
            assert_eq!(layout.cameras.len(), n as usize);
            assert!(layout.cameras.iter().all(|c| c.eye == Eye::Mono));
        }
    }

    #[test]
    fn test_stereo_counts_and_order() {
        let layout = compute_layout(&LayoutParams {
            camera_count: 6,
            stereo: true,
            ..LayoutParams::default()
        });
        assert_eq!(layout.screens.len(), 6);
        assert_eq!(layout.cameras.len(), 12);

        for (i, pair) in layout.cameras.chunks(2).enumerate() {
            assert_eq!(pair[0].eye, Eye::Left);
            assert_eq!(pair[1].eye, Eye::Right);
            assert_eq!(pair[0].sector, i as u32);
            assert_eq!(pair[1].sector, i as u32);
            assert_eq!(pair[0].viewport.x, pair[1].viewport.x);
        }
        assert_eq!(layout.cameras_for(3).count(), 2);
    }

    #[test]
    fn test_stereo_eyes_separated() {
        let params = LayoutParams {
            camera_count: 6,
            stereo: true,
            eye_separation: 0.25,
            ..LayoutParams::default()
        };
        let layout = compute_layout(&params);
        for pair in layout.cameras.chunks(2) {
            let gap = pair[0].transform.position - pair[1].transform.position;
            assert!((gap.length() - 0.5).abs() < 1e-5);
            // Left eye sits on the camera's local +X side.
            assert!(gap.dot(pair[0].transform.left()) > 0.0);
        }
    }

    #[test]
    fn test_cameras_and_screens_share_yaw() {
        let layout = compute_layout(&LayoutParams::default());
        for camera in &layout.cameras {
            let screen = &layout.screens[camera.sector as usize];
            assert_eq!(camera.yaw_degrees, screen.yaw_degrees);
        }
        assert_eq!(layout.cameras[0].yaw_degrees, 210.0);
        assert_eq!(layout.cameras[3].yaw_degrees, 390.0);
    }
}
