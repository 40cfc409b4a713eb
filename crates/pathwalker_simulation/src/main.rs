//! Headless демо PATHWALKER
//!
//! Игрок бегает/прыгает по синтетическому input (seeded RNG), chaser
//! гоняется за ним. Конфиг: первый аргумент (JSON) или встроенный demo.

use std::time::Duration;

use bevy::prelude::*;
use pathwalker_simulation::{
    create_headless_app, init_logger, log_error, log_info, spawn_chaser, spawn_locomotion_character,
    spawn_orbit_camera, use_manual_frame_time, BehaviourConfig, BehavioursPlugin,
    ConfigError, DeterministicRng, InputSnapshot, Jumped, Landed, LocomotionState, Player,
    StaticWorld,
};
use rand::Rng;

const SEED: u64 = 42;
const FRAMES: usize = 1200;

fn main() {
    init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => match BehaviourConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("Config error: {}", err));
                std::process::exit(1);
            }
        },
        None => BehaviourConfig::demo(),
    };

    let mut app = create_headless_app(SEED);
    app.add_plugins(BehavioursPlugin)
        .insert_resource(StaticWorld::with_ground_plane(0.0, 100.0))
        .add_systems(First, scripted_input);
    use_manual_frame_time(&mut app, Duration::from_secs_f64(1.0 / 60.0));

    if let Err(err) = spawn_scene(app.world_mut(), &config) {
        log_error(&format!("Scene setup failed: {}", err));
        std::process::exit(1);
    }

    log_info(&format!("Starting PATHWALKER headless simulation (seed: {})", SEED));

    let mut jumps = 0;
    let mut landings = 0;

    for frame in 0..FRAMES {
        app.update();

        jumps += app.world_mut().resource_mut::<Events<Jumped>>().drain().count();
        landings += app.world_mut().resource_mut::<Events<Landed>>().drain().count();

        if frame % 200 == 0 {
            let world = app.world_mut();
            let mut query = world.query_filtered::<(&Transform, &LocomotionState), With<Player>>();
            for (transform, state) in query.iter(world) {
                log_info(&format!(
                    "Frame {}: player at {:.2?}, phase {:?}",
                    frame,
                    transform.translation,
                    state.phase()
                ));
            }
        }
    }

    log_info(&format!(
        "Simulation complete: {} jumps, {} landings",
        jumps, landings
    ));
}

fn spawn_scene(world: &mut World, config: &BehaviourConfig) -> Result<(), ConfigError> {
    let rig = spawn_locomotion_character(world, config.locomotion, Vec3::ZERO, 1.6)?;
    world.entity_mut(rig.body).insert(Player);

    spawn_orbit_camera(world, config.camera, rig.body)?;
    spawn_chaser(world, config.chaser, rig.body, Vec3::new(8.0, 0.0, 0.0))?;

    Ok(())
}

/// Синтетический input: держим направление ~1 сек, иногда прыгаем
fn scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut input: ResMut<InputSnapshot>,
    mut frame: Local<u32>,
) {
    *frame += 1;

    if *frame % 60 == 1 {
        let x: f32 = rng.rng.gen_range(-1.0..=1.0);
        let y: f32 = rng.rng.gen_range(-1.0..=1.0);
        input.move_axis = Vec2::new(x, y);
        input.run_held = rng.rng.gen_bool(0.3);
    }

    input.pointer_delta_x = rng.rng.gen_range(-5.0..=5.0);
    input.jump_pressed = rng.rng.gen_bool(0.02);
}
