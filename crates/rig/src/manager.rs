//! The rig manager.
//!
//! [`RigManager`] owns the handles of every camera and screen entity it asked
//! the scene to create. A camera count change tears the whole rig down before
//! the replacement is built, so old and new entities are never live at the
//! same time. Eye separation and viewer height changes move the existing
//! cameras in place.

use arena_layout::compute_layout;
use arena_scene::{CameraSettings, EntityHandle, OffAxisParams, SceneGraph, TemplateRef};
use glam::Vec3;
use tracing::{debug, info, warn};

use crate::command::{CommandQueue, RigCommand};
use crate::config::{RigConfig, clamp_camera_count};
use crate::slot::{CameraSlot, ScreenSlot};

/// Where in the scene the rig lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigAnchor {
    /// Parent of every camera and screen the rig creates
    pub root: EntityHandle,
    /// Plane instantiated for each screen
    pub base_plane: TemplateRef,
}

/// Builds, rebuilds and adjusts the camera ring.
#[derive(Debug)]
pub struct RigManager {
    config: RigConfig,
    anchor: RigAnchor,
    cameras: Vec<CameraSlot>,
    screens: Vec<ScreenSlot>,
    initialized: bool,
}

impl RigManager {
    /// Create a manager; nothing is built until [`initialize`](Self::initialize).
    pub fn new(config: RigConfig, anchor: RigAnchor) -> Self {
        Self {
            config,
            anchor,
            cameras: Vec::new(),
            screens: Vec::new(),
            initialized: false,
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn anchor(&self) -> RigAnchor {
        self.anchor
    }

    /// Camera slots; left/right interleaved per sector in stereo.
    pub fn cameras(&self) -> &[CameraSlot] {
        &self.cameras
    }

    /// Screen slots in sector order.
    pub fn screens(&self) -> &[ScreenSlot] {
        &self.screens
    }

    pub fn is_built(&self) -> bool {
        !self.cameras.is_empty() || !self.screens.is_empty()
    }

    /// First start: retire the default camera if asked to, then build.
    ///
    /// Calling it again does nothing.
    pub fn initialize(&mut self, scene: &mut impl SceneGraph) {
        if self.initialized {
            warn!("Rig already initialized");
            return;
        }
        self.initialized = true;

        if self.config.disable_main_camera {
            match scene.main_camera() {
                Some(main) => {
                    scene.set_active(main, false);
                    info!("Main camera disabled");
                }
                None => debug!("No main camera to disable"),
            }
        }

        self.build_rig(scene);
    }

    /// Create screens and cameras for the current configuration.
    ///
    /// An existing rig is torn down first.
    pub fn build_rig(&mut self, scene: &mut impl SceneGraph) {
        if self.is_built() {
            self.teardown_rig(scene);
        }

        let config = &self.config;
        let layout = compute_layout(&config.layout_params());
        let near_clip = (!config.clip_to_arena).then_some(config.near_clip_plane);

        for screen in &layout.screens {
            let name = format!("Plane{:03}", screen.sector);
            let entity = scene.create_entity(self.anchor.base_plane, self.anchor.root, &name);
            scene.set_transform(entity, &screen.transform);
            debug!("Created {} at yaw {:.1}", name, screen.yaw_degrees);

            self.screens.push(ScreenSlot {
                index: screen.sector,
                entity,
                transform: screen.transform,
                width: layout.geometry.screen_width,
                height: layout.geometry.screen_height,
            });

            for camera in layout.cameras_for(screen.sector) {
                let name = format!("Camera{}{:03}", camera.eye.label(), camera.sector);
                let entity = scene.create_camera(self.anchor.root, &name);
                scene.set_transform(entity, &camera.transform);

                let settings = CameraSettings {
                    viewport: camera.viewport,
                    depth: camera.priority,
                    near_clip,
                    far_clip: config.far_clip_plane,
                };
                scene.configure_camera(entity, &settings);

                let projection = OffAxisParams::new(
                    self.screens[screen.sector as usize].entity,
                    config.estimate_view_frustum_on_cameras,
                    config.clip_to_arena,
                );
                scene.attach_off_axis(entity, &projection);
                debug!(
                    "Created {} depth {} viewport ({:.3}, {:.3}, {:.3}, {:.3})",
                    name,
                    settings.depth,
                    settings.viewport.x,
                    settings.viewport.y,
                    settings.viewport.width,
                    settings.viewport.height
                );

                self.cameras.push(CameraSlot {
                    index: self.cameras.len(),
                    sector: camera.sector,
                    eye: camera.eye,
                    entity,
                    transform: camera.transform,
                    settings,
                    projection,
                });
            }
        }

        info!(
            "Built {} rig: {} screens, {} cameras (width {:.3}, distance {:.3})",
            if config.use_stereo { "stereo" } else { "mono" },
            self.screens.len(),
            self.cameras.len(),
            layout.geometry.screen_width,
            layout.geometry.screen_distance
        );
    }

    /// Destroy every camera and screen entity and forget their handles.
    pub fn teardown_rig(&mut self, scene: &mut impl SceneGraph) {
        let (cameras, screens) = (self.cameras.len(), self.screens.len());
        for camera in self.cameras.drain(..) {
            scene.destroy_entity(camera.entity);
        }
        for screen in self.screens.drain(..) {
            scene.destroy_entity(screen.entity);
        }
        info!("Rig torn down: {} cameras, {} screens", cameras, screens);
    }

    /// Rebuild the rig with `requested` cameras per ring.
    ///
    /// Asking for the current count does nothing. Anything else rebuilds from
    /// scratch with the count clamped to the resize range; no existing camera
    /// or screen survives.
    pub fn set_camera_count(&mut self, scene: &mut impl SceneGraph, requested: i64) {
        if requested == i64::from(self.config.camera_count) {
            return;
        }

        self.teardown_rig(scene);

        let count = clamp_camera_count(requested);
        if i64::from(count) != requested {
            debug!("Camera count {} clamped to {}", requested, count);
        }
        info!("Camera count {} -> {}", self.config.camera_count, count);
        self.config.camera_count = count;

        self.build_rig(scene);
    }

    /// Move both eyes of every stereo pair apart by `delta` each.
    ///
    /// Ignored in mono.
    pub fn adjust_eye_separation(&mut self, scene: &mut impl SceneGraph, delta: f32) {
        if !self.config.use_stereo {
            debug!("Eye separation change ignored: rig is mono");
            return;
        }

        self.config.eye_separation += delta;
        for camera in &mut self.cameras {
            camera
                .transform
                .translate_local(Vec3::X * camera.eye.lateral_sign() * delta);
            scene.set_transform(camera.entity, &camera.transform);
        }
        debug!("Eye separation now {:.3}", self.config.eye_separation);
    }

    /// Raise every camera by `delta`.
    pub fn adjust_viewer_height(&mut self, scene: &mut impl SceneGraph, delta: f32) {
        self.config.viewer_height += delta;
        for camera in &mut self.cameras {
            camera.transform.translate(Vec3::Y * delta);
            scene.set_transform(camera.entity, &camera.transform);
        }
        debug!("Viewer height now {:.3}", self.config.viewer_height);
    }

    /// Apply one adjustment using the configured step sizes.
    pub fn apply(&mut self, scene: &mut impl SceneGraph, command: RigCommand) {
        let steps = self.config.steps;
        let count = i64::from(self.config.camera_count);
        let count_step = i64::from(steps.camera_count);

        match command {
            RigCommand::DecreaseCount => self.set_camera_count(scene, count - count_step),
            RigCommand::IncreaseCount => self.set_camera_count(scene, count + count_step),
            RigCommand::IncreaseSeparation => {
                self.adjust_eye_separation(scene, steps.eye_separation)
            }
            RigCommand::DecreaseSeparation => {
                self.adjust_eye_separation(scene, -steps.eye_separation)
            }
            RigCommand::IncreaseHeight => self.adjust_viewer_height(scene, steps.viewer_height),
            RigCommand::DecreaseHeight => self.adjust_viewer_height(scene, -steps.viewer_height),
        }
    }

    /// Apply everything queued for this tick and empty the queue.
    pub fn tick(&mut self, scene: &mut impl SceneGraph, queue: &mut CommandQueue) {
        for command in queue.drain() {
            self.apply(scene, command);
        }
    }
}
