//! Integration tests driving the rig through whole sessions against an
//! in-memory scene.

use arena_layout::{PLANE_TEMPLATE_SIZE, plane_template_rotation};
use arena_rig::{CommandQueue, RigAnchor, RigCommand, RigConfig, RigManager};
use arena_scene::{SceneGraph, SceneWorld, Transform};
use glam::Vec3;

/// Main camera, rig root and plane template.
const BASE_ENTITIES: usize = 3;

fn start(config: RigConfig) -> (SceneWorld, RigManager) {
    let mut world = SceneWorld::new();
    world.spawn_main_camera("Main Camera", Transform::IDENTITY);
    let root = world.spawn_empty("CameraRig", None);
    world.set_transform(
        root,
        &Transform::new().with_position(Vec3::new(100.0, 0.0, -50.0)),
    );
    let base_plane = world.spawn_plane_template(
        "BasePlane",
        Transform::new().with_rotation(plane_template_rotation()),
    );

    let mut rig = RigManager::new(config, RigAnchor { root, base_plane });
    rig.initialize(&mut world);
    (world, rig)
}

fn hold(world: &mut SceneWorld, rig: &mut RigManager, command: RigCommand, ticks: usize) {
    let mut queue = CommandQueue::new();
    for _ in 0..ticks {
        queue.push(command);
        rig.tick(world, &mut queue);
    }
}

#[test]
fn test_holding_increase_saturates_at_72() {
    let (mut world, mut rig) = start(RigConfig::default());

    hold(&mut world, &mut rig, RigCommand::IncreaseCount, 20);

    assert_eq!(rig.config().camera_count, 72);
    assert_eq!(rig.cameras().len(), 72);
    assert_eq!(world.len(), BASE_ENTITIES + 2 * 72);
}

#[test]
fn test_holding_decrease_saturates_at_6() {
    let (mut world, mut rig) = start(RigConfig {
        camera_count: 24,
        use_stereo: true,
        ..RigConfig::default()
    });

    hold(&mut world, &mut rig, RigCommand::DecreaseCount, 10);

    assert_eq!(rig.config().camera_count, 6);
    assert_eq!(rig.screens().len(), 6);
    assert_eq!(rig.cameras().len(), 12);
    assert_eq!(world.len(), BASE_ENTITIES + 6 + 12);
}

#[test]
fn test_small_start_count_resizes_into_range() {
    let (mut world, mut rig) = start(RigConfig {
        camera_count: 4,
        ..RigConfig::default()
    });
    assert_eq!(rig.cameras().len(), 4);

    hold(&mut world, &mut rig, RigCommand::DecreaseCount, 1);
    assert_eq!(rig.config().camera_count, 6);
}

#[test]
fn test_screen_corners_lie_on_arena_wall() {
    let (world, rig) = start(RigConfig {
        camera_count: 18,
        ..RigConfig::default()
    });
    let centre = Vec3::new(100.0, 0.0, -50.0);
    let half = PLANE_TEMPLATE_SIZE / 2.0;

    for screen in rig.screens() {
        let world_matrix = world.world_matrix(screen.entity).expect("screen");
        for corner in [
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.0, -half),
            Vec3::new(-half, 0.0, half),
            Vec3::new(half, 0.0, half),
        ] {
            let p = world_matrix.transform_point3(corner) - centre;
            let radius = Vec3::new(p.x, 0.0, p.z).length();
            assert!((radius - 4.9).abs() < 1e-3, "corner at radius {}", radius);
            assert!(p.y.abs() < 1e-3 || (p.y - 4.0).abs() < 1e-3);
        }
    }
}

#[test]
fn test_cameras_look_at_their_screens() {
    let (world, rig) = start(RigConfig {
        use_stereo: true,
        ..RigConfig::default()
    });

    for camera in rig.cameras() {
        let screen = world.get(camera.screen()).expect("screen");
        let to_screen = screen.transform.position - camera.transform.position;
        let forward = camera.transform.forward();
        assert!(to_screen.dot(forward) > 4.0);
        // The screen normal points back at the viewer.
        assert!(screen.transform.up().dot(forward) < -0.99);
    }
}

#[test]
fn test_render_order_follows_camera_index_in_mono() {
    let (world, rig) = start(RigConfig {
        camera_count: 12,
        ..RigConfig::default()
    });

    let order: Vec<_> = world.render_order().into_iter().map(|(h, _)| h).collect();
    let expected: Vec<_> = rig.cameras().iter().map(|c| c.entity).collect();
    assert_eq!(order, expected);
}

#[test]
fn test_adjustments_survive_until_resize() {
    let (mut world, mut rig) = start(RigConfig {
        use_stereo: true,
        ..RigConfig::default()
    });

    hold(&mut world, &mut rig, RigCommand::IncreaseHeight, 3);
    hold(&mut world, &mut rig, RigCommand::IncreaseSeparation, 2);
    let height = rig.config().viewer_height;
    let separation = rig.config().eye_separation;
    assert!((height - 1.5).abs() < 1e-4);
    assert!((separation - 0.15).abs() < 1e-4);

    // A rebuild lays cameras out from the adjusted values.
    hold(&mut world, &mut rig, RigCommand::IncreaseCount, 1);
    assert_eq!(rig.config().camera_count, 12);
    for pair in rig.cameras().chunks(2) {
        assert!((pair[0].transform.position.y - height).abs() < 1e-4);
        let gap = (pair[0].transform.position - pair[1].transform.position).length();
        assert!((gap - 2.0 * separation).abs() < 1e-4);
    }
}

#[test]
fn test_no_entities_leak_across_sessions() {
    let (mut world, mut rig) = start(RigConfig::default());

    for command in [
        RigCommand::IncreaseCount,
        RigCommand::IncreaseCount,
        RigCommand::DecreaseCount,
        RigCommand::IncreaseHeight,
    ] {
        hold(&mut world, &mut rig, command, 2);
    }
    rig.teardown_rig(&mut world);

    assert!(!rig.is_built());
    assert_eq!(world.len(), BASE_ENTITIES);
    assert_eq!(world.created_count(), world.destroyed_count());
}
