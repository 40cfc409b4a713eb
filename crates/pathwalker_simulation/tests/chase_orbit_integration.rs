//! Chase + orbit integration test
//!
//! Headless App без ввода движения: только pointer yaw и chaser'ы.

use std::time::Duration;

use bevy::prelude::*;
use pathwalker_simulation::*;

const FRAME: f32 = 1.0 / 60.0;

fn create_app() -> App {
    let mut app = create_headless_app(11);
    app.add_plugins(BehavioursPlugin)
        .insert_resource(StaticWorld::with_ground_plane(0.0, 100.0));
    use_manual_frame_time(&mut app, Duration::from_secs_f32(FRAME));
    app
}

fn spawn_target(app: &mut App, position: Vec3) -> Entity {
    app.world_mut().spawn(Transform::from_translation(position)).id()
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

fn delta_secs(app: &App) -> f32 {
    app.world().resource::<Time>().delta_secs()
}

#[test]
fn test_chaser_closes_in_when_in_range() {
    let mut app = create_app();
    let config = BehaviourConfig::demo().chaser;

    let target = spawn_target(&mut app, Vec3::ZERO);
    let chaser = spawn_chaser(app.world_mut(), config, target, Vec3::new(3.0, 0.0, 4.0)).unwrap();

    app.update();

    for _ in 0..10 {
        let before = position(&app, chaser);
        app.update();
        let after = position(&app, chaser);

        let moved = after - before;
        let expected_direction = (Vec3::ZERO - before).normalize();
        assert!(moved.normalize().abs_diff_eq(expected_direction, 1e-5));
        assert!((moved.length() - config.speed * delta_secs(&app)).abs() < 1e-4);
    }
}

#[test]
fn test_chaser_ignores_far_target() {
    let mut app = create_app();
    let config = BehaviourConfig::demo().chaser;

    let target = spawn_target(&mut app, Vec3::ZERO);
    let start = Vec3::new(config.chase_distance + 0.5, 0.0, 0.0);
    let chaser = spawn_chaser(app.world_mut(), config, target, start).unwrap();

    for _ in 0..30 {
        app.update();
    }

    assert_eq!(position(&app, chaser), start);
}

#[test]
fn test_chaser_reaches_target_without_nan() {
    let mut app = create_app();
    let config = BehaviourConfig::demo().chaser;
    let goal = Vec3::new(1.0, 0.0, 1.0);

    let target = spawn_target(&mut app, goal);
    let chaser = spawn_chaser(app.world_mut(), config, target, Vec3::new(1.5, 0.0, 1.0)).unwrap();

    // 0.5m на 5 m/s: ~6 кадров, дальше колеблемся вокруг target в пределах шага
    let max_step = config.speed * FRAME;
    for frame in 0..30 {
        app.update();
        let p = position(&app, chaser);
        assert!(p.is_finite());
        if frame >= 8 {
            assert!((p - goal).length() <= max_step + 1e-4, "frame {} at {:?}", frame, p);
        }
    }
}

#[test]
fn test_chaser_idles_when_target_despawned() {
    let mut app = create_app();
    let config = BehaviourConfig::demo().chaser;

    let target = spawn_target(&mut app, Vec3::ZERO);
    let start = Vec3::new(2.0, 0.0, 0.0);
    let chaser = spawn_chaser(app.world_mut(), config, target, start).unwrap();

    app.world_mut().despawn(target);
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(position(&app, chaser), start);
}

#[test]
fn test_spawn_chaser_rejects_missing_target() {
    let mut app = create_app();
    let ghost = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(ghost);

    let result = spawn_chaser(
        app.world_mut(),
        BehaviourConfig::demo().chaser,
        ghost,
        Vec3::ZERO,
    );
    assert!(matches!(result, Err(ConfigError::MissingReference { .. })));
}

#[test]
fn test_orbit_yaw_follows_pointer() {
    let mut app = create_app();
    let config = BehaviourConfig::demo().camera;

    let pivot = spawn_target(&mut app, Vec3::ZERO);
    spawn_orbit_camera(app.world_mut(), config, pivot).unwrap();
    app.update();

    app.world_mut().resource_mut::<InputSnapshot>().pointer_delta_x = 12.0;

    let mut expected_yaw = 0.0;
    for _ in 0..20 {
        app.update();
        expected_yaw += 12.0 * config.sensitivity * delta_secs(&app);
    }

    let rotation = app.world().get::<Transform>(pivot).unwrap().rotation;
    assert!(rotation.abs_diff_eq(Quat::from_rotation_y(expected_yaw), 1e-5));
}

#[test]
fn test_orbit_without_pointer_is_noop() {
    let mut app = create_app();
    let pivot = spawn_target(&mut app, Vec3::ZERO);
    spawn_orbit_camera(app.world_mut(), BehaviourConfig::demo().camera, pivot).unwrap();

    for _ in 0..10 {
        app.update();
    }

    assert_eq!(app.world().get::<Transform>(pivot).unwrap().rotation, Quat::IDENTITY);
}

#[test]
fn test_orbit_turns_player_walk_direction() {
    let mut app = create_app();
    let demo = BehaviourConfig::demo();

    let rig = spawn_locomotion_character(app.world_mut(), demo.locomotion, Vec3::ZERO, 1.6).unwrap();
    app.world_mut().entity_mut(rig.body).insert(Player);
    app.world_mut()
        .entity_mut(rig.body)
        .get_mut::<Transform>()
        .unwrap()
        .rotate_y(std::f32::consts::FRAC_PI_2);
    spawn_orbit_camera(app.world_mut(), demo.camera, rig.body).unwrap();
    app.update();

    *app.world_mut().resource_mut::<InputSnapshot>() = InputSnapshot {
        move_axis: Vec2::new(0.0, 1.0),
        ..default()
    };
    for _ in 0..30 {
        app.update();
    }

    // Повернут на 90° вокруг Y: forward = world -X
    let p = position(&app, rig.body);
    assert!(p.x < -0.9, "position {:?}", p);
    assert!(p.z.abs() < 1e-4);
}
