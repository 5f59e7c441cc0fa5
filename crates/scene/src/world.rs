//! In-memory scene graph.
//!
//! [`SceneWorld`] keeps entities in a slot map so handles stay valid (and
//! stale handles are detected) across create/destroy cycles. It is the scene
//! the application runs the rig against, and what the rig tests observe.

use glam::Mat4;
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::camera::{CameraSettings, OffAxisParams};
use crate::graph::{EntityHandle, SceneGraph, TemplateRef};
use crate::transform::Transform;

/// What an entity represents.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// Grouping node without content
    Empty,
    /// Flat proxy plane (screen)
    Plane,
    /// Camera with its output settings and projection, once configured
    Camera {
        settings: Option<CameraSettings>,
        off_axis: Option<OffAxisParams>,
    },
}

/// An entity stored in a [`SceneWorld`].
#[derive(Clone, Debug)]
pub struct SceneEntity {
    pub name: String,
    pub parent: Option<EntityHandle>,
    pub children: Vec<EntityHandle>,
    pub transform: Transform,
    pub kind: EntityKind,
    pub active: bool,
}

impl SceneEntity {
    fn new(
        name: &str,
        parent: Option<EntityHandle>,
        transform: Transform,
        kind: EntityKind,
    ) -> Self {
        Self {
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            transform,
            kind,
            active: true,
        }
    }

    /// Camera settings, if this is a configured camera.
    pub fn camera_settings(&self) -> Option<&CameraSettings> {
        match &self.kind {
            EntityKind::Camera { settings, .. } => settings.as_ref(),
            _ => None,
        }
    }

    /// Off-axis projection parameters, if this camera has one attached.
    pub fn off_axis(&self) -> Option<&OffAxisParams> {
        match &self.kind {
            EntityKind::Camera { off_axis, .. } => off_axis.as_ref(),
            _ => None,
        }
    }
}

/// In-memory [`SceneGraph`] implementation.
#[derive(Debug, Default)]
pub struct SceneWorld {
    entities: SlotMap<EntityHandle, SceneEntity>,
    main_camera: Option<EntityHandle>,
    created: usize,
    destroyed: usize,
}

impl SceneWorld {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty grouping node, optionally under `parent`.
    pub fn spawn_empty(&mut self, name: &str, parent: Option<EntityHandle>) -> EntityHandle {
        self.insert(SceneEntity::new(
            name,
            parent,
            Transform::IDENTITY,
            EntityKind::Empty,
        ))
    }

    /// Add an inactive plane to instantiate screens from.
    pub fn spawn_plane_template(&mut self, name: &str, transform: Transform) -> TemplateRef {
        let mut entity = SceneEntity::new(name, None, transform, EntityKind::Plane);
        entity.active = false;
        TemplateRef(self.insert(entity))
    }

    /// Add the application's default camera.
    pub fn spawn_main_camera(&mut self, name: &str, transform: Transform) -> EntityHandle {
        let handle = self.insert(SceneEntity::new(
            name,
            None,
            transform,
            EntityKind::Camera {
                settings: None,
                off_axis: None,
            },
        ));
        self.main_camera = Some(handle);
        handle
    }

    /// Look up an entity.
    pub fn get(&self, entity: EntityHandle) -> Option<&SceneEntity> {
        self.entities.get(entity)
    }

    /// Whether `entity` is still alive.
    pub fn contains(&self, entity: EntityHandle) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities, templates included.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities created through [`SceneGraph`] calls so far.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Entities destroyed so far, children included.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Iterate over all live entities.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &SceneEntity)> {
        self.entities.iter()
    }

    /// World matrix of an entity, composed through its parents.
    pub fn world_matrix(&self, entity: EntityHandle) -> Option<Mat4> {
        let node = self.entities.get(entity)?;
        let local = node.transform.local_matrix();
        match node.parent {
            Some(parent) => Some(self.world_matrix(parent).unwrap_or(Mat4::IDENTITY) * local),
            None => Some(local),
        }
    }

    /// Active configured cameras in the order they render, by ascending depth.
    /// Equal depths keep slot order.
    pub fn render_order(&self) -> Vec<(EntityHandle, CameraSettings)> {
        let mut cameras: Vec<_> = self
            .entities
            .iter()
            .filter(|(_, e)| e.active)
            .filter_map(|(h, e)| e.camera_settings().map(|s| (h, *s)))
            .collect();
        cameras.sort_by_key(|(_, s)| s.depth);
        cameras
    }

    fn insert(&mut self, entity: SceneEntity) -> EntityHandle {
        let parent = entity.parent;
        let handle = self.entities.insert(entity);
        if let Some(parent) = parent
            && let Some(p) = self.entities.get_mut(parent)
        {
            p.children.push(handle);
        }
        handle
    }

    fn remove_recursive(&mut self, entity: EntityHandle) {
        if let Some(node) = self.entities.remove(entity) {
            self.destroyed += 1;
            if self.main_camera == Some(entity) {
                self.main_camera = None;
            }
            for child in node.children {
                self.remove_recursive(child);
            }
        }
    }
}

impl SceneGraph for SceneWorld {
    fn create_entity(
        &mut self,
        template: TemplateRef,
        parent: EntityHandle,
        name: &str,
    ) -> EntityHandle {
        let (transform, kind) = match self.entities.get(template.0) {
            Some(t) => (t.transform, t.kind.clone()),
            None => {
                warn!("Template {:?} not found, creating empty entity", template);
                (Transform::IDENTITY, EntityKind::Empty)
            }
        };
        self.created += 1;
        self.insert(SceneEntity::new(name, Some(parent), transform, kind))
    }

    fn create_camera(&mut self, parent: EntityHandle, name: &str) -> EntityHandle {
        self.created += 1;
        self.insert(SceneEntity::new(
            name,
            Some(parent),
            Transform::IDENTITY,
            EntityKind::Camera {
                settings: None,
                off_axis: None,
            },
        ))
    }

    fn destroy_entity(&mut self, entity: EntityHandle) {
        let Some(parent) = self.entities.get(entity).map(|e| e.parent) else {
            warn!("Destroy of unknown entity {:?} ignored", entity);
            return;
        };
        if let Some(p) = parent.and_then(|p| self.entities.get_mut(p)) {
            p.children.retain(|c| *c != entity);
        }
        self.remove_recursive(entity);
    }

    fn set_transform(&mut self, entity: EntityHandle, transform: &Transform) {
        match self.entities.get_mut(entity) {
            Some(e) => e.transform = *transform,
            None => warn!("Transform update for unknown entity {:?} ignored", entity),
        }
    }

    fn configure_camera(&mut self, camera: EntityHandle, camera_settings: &CameraSettings) {
        match self.entities.get_mut(camera).map(|e| &mut e.kind) {
            Some(EntityKind::Camera { settings, .. }) => *settings = Some(*camera_settings),
            _ => warn!("configure_camera on non-camera {:?} ignored", camera),
        }
    }

    fn attach_off_axis(&mut self, camera: EntityHandle, params: &OffAxisParams) {
        match self.entities.get_mut(camera).map(|e| &mut e.kind) {
            Some(EntityKind::Camera { off_axis, .. }) => *off_axis = Some(*params),
            _ => warn!("attach_off_axis on non-camera {:?} ignored", camera),
        }
    }

    fn main_camera(&self) -> Option<EntityHandle> {
        self.main_camera
    }

    fn set_active(&mut self, entity: EntityHandle, active: bool) {
        if let Some(e) = self.entities.get_mut(entity) {
            debug!("{} {}", if active { "Activating" } else { "Deactivating" }, e.name);
            e.active = active;
        }
    }
}
