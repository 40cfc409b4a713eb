//! Locomotion ECS системы
//!
//! - `update_locomotion`: логика кадра (BehaviourSet::Logic)
//! - `recover_camera_bob`: late pass, после всех transitions

use std::collections::HashSet;

use bevy::prelude::*;

use super::animation::AnimatorParameters;
use super::bob::CameraBob;
use super::controller::step;
use super::events::{Jumped, Landed};
use super::state::LocomotionState;
use super::LocomotionController;
use crate::components::LocomotionInput;
use crate::physics::{GroundProbe, KinematicMover, StaticWorld};

/// Система: probe → step → mover
///
/// Горизонталь и вертикаль: две отдельные команды mover'у в одном кадре.
#[allow(clippy::type_complexity)]
pub fn update_locomotion(
    mut bodies: Query<(
        Entity,
        &LocomotionController,
        &LocomotionInput,
        &mut LocomotionState,
        &mut CameraBob,
        &mut Transform,
    )>,
    mut animators: Query<&mut AnimatorParameters>,
    world: Res<StaticWorld>,
    time: Res<Time>,
    mut jumped: EventWriter<Jumped>,
    mut landed: EventWriter<Landed>,
    mut reported: Local<HashSet<Entity>>,
) {
    let delta = time.delta_secs();

    for (entity, controller, input, mut state, mut bob, mut transform) in bodies.iter_mut() {
        let config = controller.config();

        let Ok(mut animator) = animators.get_mut(controller.animator()) else {
            if reported.insert(entity) {
                crate::logger::log_warning(&format!(
                    "locomotion: animator {:?} of {:?} is gone, skipping",
                    controller.animator(),
                    entity
                ));
            }
            continue;
        };

        let ground = config.ground_groups();
        let probe = world.check_sphere(transform.translation, config.ground_check_radius, ground);

        let motion = step(
            config,
            &mut state,
            &mut bob,
            input,
            transform.rotation,
            probe,
            delta,
            &mut *animator,
        );

        let moved = world.move_by(transform.translation, motion.horizontal, ground);
        transform.translation = world.move_by(moved, motion.vertical, ground);

        if motion.landed {
            crate::logger::log_info(&format!("{:?} landed at {:?}", entity, transform.translation));
            landed.write(Landed { entity });
        }

        if let Some(launch_velocity) = motion.launch_velocity {
            crate::logger::log_info(&format!(
                "{:?} jumped (launch velocity {:.3} m/s)",
                entity, launch_velocity
            ));
            jumped.write(Jumped {
                entity,
                launch_velocity,
            });
        }
    }
}

/// Система (late): camera offset → rest, экспоненциально
pub fn recover_camera_bob(
    mut bodies: Query<(&LocomotionController, &mut CameraBob)>,
    mut cameras: Query<&mut Transform>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (controller, mut bob) in bodies.iter_mut() {
        bob.recover(controller.config().bob_return_speed, delta);

        if let Ok(mut camera) = cameras.get_mut(controller.camera()) {
            camera.translation = bob.local_position();
        }
    }
}
