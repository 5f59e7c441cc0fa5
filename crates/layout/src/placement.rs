//! Camera and screen placement around the rig centre.
//!
//! Both placements are built the way the scene graph applies them: start at
//! the rig origin, rotate into the sector, then translate along the rotated
//! local axes. The order matters; swapping a rotation and a translation moves
//! the object somewhere else.

use std::f32::consts::FRAC_PI_2;

use arena_scene::Transform;
use glam::{Quat, Vec3};

use crate::geometry::{SectorGeometry, sector_angle};

/// Edge length of the square template plane screens are instantiated from.
pub const PLANE_TEMPLATE_SIZE: f32 = 10.0;

/// Orientation of the template plane.
///
/// The template lies in its local XZ plane with +Y as its normal. Tilting it
/// stands it upright: local +Z points up and the normal points along -Z.
pub fn plane_template_rotation() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

/// Yaw of a sector in degrees.
///
/// Not wrapped into `[0, 360)`; the rotation it produces is the same.
pub fn sector_yaw(index: u32, total: u32, rotation_offset: f32) -> f32 {
    rotation_offset + index as f32 * sector_angle(total)
}

/// A computed transform together with the sector yaw it was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub transform: Transform,
    pub yaw_degrees: f32,
}

/// Place the camera of sector `index`.
///
/// The camera is yawed into its sector, raised to eye level and then shifted
/// along its own lateral axis by `eye_offset` (positive is to the viewer's
/// left).
pub fn camera_placement(
    index: u32,
    total: u32,
    rotation_offset: f32,
    viewer_height: f32,
    eye_offset: f32,
) -> Placement {
    let yaw_degrees = sector_yaw(index, total, rotation_offset);

    let mut transform = Transform::new();
    transform.rotate_local(Quat::from_rotation_y(yaw_degrees.to_radians()));
    transform.translate_local(Vec3::Y * viewer_height);
    transform.translate_local(Vec3::X * eye_offset);

    Placement {
        transform,
        yaw_degrees,
    }
}

/// Place the screen plane of sector `index`.
///
/// Starting from the template orientation the plane is spun about its normal
/// into the sector, pushed out to the chord (along its local -Y) and lifted by
/// half its height (along its local +Z, which is world up) so that it stands
/// on the floor. The template is scaled so its edges match the chord width
/// and the screen height; depth collapses to zero.
pub fn screen_placement(
    index: u32,
    total: u32,
    rotation_offset: f32,
    geometry: &SectorGeometry,
) -> Placement {
    let yaw_degrees = sector_yaw(index, total, rotation_offset);

    let mut transform = Transform::new().with_rotation(plane_template_rotation());
    transform.rotate_local(Quat::from_rotation_z(yaw_degrees.to_radians()));
    transform.translate_local(Vec3::NEG_Y * geometry.screen_distance);
    transform.translate_local(Vec3::Z * geometry.screen_height * 0.5);
    transform.scale = Vec3::new(
        geometry.screen_width / PLANE_TEMPLATE_SIZE,
        0.0,
        geometry.screen_height / PLANE_TEMPLATE_SIZE,
    );

    Placement {
        transform,
        yaw_degrees,
    }
}
