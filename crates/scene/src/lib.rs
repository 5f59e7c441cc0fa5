//! Scene graph types shared by the rig and its collaborators.
//!
//! This crate provides:
//! - Transforms with local-space rotate/translate operations
//! - Camera output settings and the off-axis projection parameter bundle
//! - The [`SceneGraph`] collaborator trait
//! - [`SceneWorld`], an in-memory scene graph backed by a slot map
//!
//! Arena space is right-handed and Y-up. A camera with identity rotation looks
//! down +Z, so its local +X axis points to the viewer's left.

pub mod camera;
pub mod graph;
pub mod transform;
pub mod world;

pub use camera::{CameraSettings, NEAR_CLIP_DISTANCE_OFFSET, OffAxisParams, ViewportRect};
pub use graph::{EntityHandle, SceneGraph, TemplateRef};
pub use transform::Transform;
pub use world::{EntityKind, SceneEntity, SceneWorld};
