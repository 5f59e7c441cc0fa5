//! The scene graph collaborator.
//!
//! The rig never owns engine objects directly. It asks a [`SceneGraph`] to
//! create and destroy entities and keeps the returned handles; every call is
//! synchronous and assumed to succeed.

use slotmap::new_key_type;

use crate::camera::{CameraSettings, OffAxisParams};
use crate::transform::Transform;

new_key_type! {
    /// Generational handle to an entity in a scene graph.
    pub struct EntityHandle;
}

/// An entity used as a prototype for [`SceneGraph::create_entity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TemplateRef(pub EntityHandle);

/// Entity factory, transform sink and projection collaborator.
pub trait SceneGraph {
    /// Instantiate `template` as an active child of `parent`.
    ///
    /// The new entity starts with a copy of the template's transform.
    fn create_entity(
        &mut self,
        template: TemplateRef,
        parent: EntityHandle,
        name: &str,
    ) -> EntityHandle;

    /// Create a camera entity under `parent` at the parent's origin.
    fn create_camera(&mut self, parent: EntityHandle, name: &str) -> EntityHandle;

    /// Destroy an entity and everything parented to it.
    fn destroy_entity(&mut self, entity: EntityHandle);

    /// Replace an entity's parent-relative transform.
    fn set_transform(&mut self, entity: EntityHandle, transform: &Transform);

    /// Set a camera's viewport, render priority and clip planes.
    fn configure_camera(&mut self, camera: EntityHandle, settings: &CameraSettings);

    /// Attach an off-axis projection to a camera.
    fn attach_off_axis(&mut self, camera: EntityHandle, params: &OffAxisParams);

    /// The application's default camera, if the scene has one.
    fn main_camera(&self) -> Option<EntityHandle>;

    /// Activate or deactivate an entity.
    fn set_active(&mut self, entity: EntityHandle, active: bool);
}
