//! The scene the rig runs in.

use arena_layout::plane_template_rotation;
use arena_rig::{CommandQueue, RigAnchor, RigConfig, RigManager};
use arena_scene::{SceneWorld, Transform};
use tracing::info;

/// Scene plus the rig built into it.
pub struct Arena {
    world: SceneWorld,
    rig: RigManager,
}

impl Arena {
    /// Set up the scene and build the rig.
    ///
    /// The scene starts with a default camera, which the rig disables when
    /// configured to, and an inactive plane the screens are instantiated from.
    pub fn new(config: RigConfig) -> Self {
        let mut world = SceneWorld::new();
        world.spawn_main_camera("Main Camera", Transform::IDENTITY);
        let root = world.spawn_empty("CameraRig", None);
        let base_plane = world.spawn_plane_template(
            "BasePlane",
            Transform::new().with_rotation(plane_template_rotation()),
        );

        let mut rig = RigManager::new(config, RigAnchor { root, base_plane });
        rig.initialize(&mut world);

        Self { world, rig }
    }

    pub fn rig(&self) -> &RigManager {
        &self.rig
    }

    pub fn world(&self) -> &SceneWorld {
        &self.world
    }

    /// Apply this tick's commands. Returns true if the rig was rebuilt with a
    /// different camera count.
    pub fn tick(&mut self, queue: &mut CommandQueue) -> bool {
        let before = self.rig.config().camera_count;
        self.rig.tick(&mut self.world, queue);
        self.rig.config().camera_count != before
    }

    /// Window title describing the current rig.
    pub fn title(&self, base: &str) -> String {
        let config = self.rig.config();
        format!(
            "{} - {} {} cameras",
            base,
            config.camera_count,
            if config.use_stereo { "stereo" } else { "mono" }
        )
    }

    /// Log every camera output in render order, in pixels of a surface of the
    /// given size.
    pub fn log_outputs(&self, width: u32, height: u32) {
        for (handle, settings) in self.world.render_order() {
            let name = self
                .world
                .get(handle)
                .map(|e| e.name.as_str())
                .unwrap_or("?");
            let (x, y, w, h) = settings.viewport.to_pixels(width, height);
            info!(
                "{:<12} depth {:>4}  {}x{} at ({}, {})",
                name, settings.depth, w, h, x, y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_rig::RigCommand;

    #[test]
    fn test_new_builds_rig() {
        let arena = Arena::new(RigConfig::default());
        assert_eq!(arena.rig().cameras().len(), 6);
        assert_eq!(arena.world().render_order().len(), 6);
        assert_eq!(arena.title("Arena"), "Arena - 6 mono cameras");
    }

    #[test]
    fn test_tick_reports_rebuilds() {
        let mut arena = Arena::new(RigConfig::default());
        let mut queue = CommandQueue::new();

        queue.push(RigCommand::IncreaseHeight);
        assert!(!arena.tick(&mut queue));

        queue.push(RigCommand::IncreaseCount);
        assert!(arena.tick(&mut queue));
        assert_eq!(arena.rig().cameras().len(), 12);
    }
}
