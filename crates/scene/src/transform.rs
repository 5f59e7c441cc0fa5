//! Transform component for scene objects.
//!
//! This module provides the [`Transform`] struct for representing position,
//! rotation, and scale of scene objects relative to their parent entity. Besides
//! plain field access it supports the local-space operations the rig layout is
//! expressed in: rotating about the object's own axes and translating along
//! them, applied in sequence.
//!
//! # Example
//!
//! ```
//! use arena_scene::Transform;
//! use glam::{Quat, Vec3};
//!
//! let mut t = Transform::new();
//! t.rotate_local(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
//! t.translate_local(Vec3::Z * 2.0);
//!
//! // Forward (+Z) was rotated onto +X before translating.
//! assert!((t.position - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
//! ```

use glam::{Mat4, Quat, Vec3};

/// A transform representing position, rotation, and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position relative to the parent entity
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Transform at the origin with no rotation and unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotate about the transform's own axes.
    ///
    /// The rotation is applied after the current one, so `rotation` is
    /// expressed in local space.
    pub fn rotate_local(&mut self, rotation: Quat) {
        self.rotation = (self.rotation * rotation).normalize();
    }

    /// Translate along the transform's own (rotated) axes.
    ///
    /// Scale does not affect the distance moved.
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }

    /// Translate along the parent's axes.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Get the local transformation matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the forward direction vector (+Z rotated).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the left direction vector (+X rotated).
    pub fn left(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector (+Y rotated).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
