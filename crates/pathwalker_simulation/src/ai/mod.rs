//! AI module
//!
//! Только proximity chase: distance check + прямолинейное движение.

use bevy::prelude::*;

use crate::config::ConfigError;

pub mod proximity_chase;

pub use proximity_chase::{chase_displacement, chase_targets, ChaserConfig, ProximityChaser};

/// Spawn helper: chaser в `position`, преследующий `target`
pub fn spawn_chaser(
    world: &mut World,
    config: ChaserConfig,
    target: Entity,
    position: Vec3,
) -> Result<Entity, ConfigError> {
    if world.get::<Transform>(target).is_none() {
        return Err(ConfigError::MissingReference {
            role: "chase target",
            entity: target,
            component: "Transform",
        });
    }

    let chaser = ProximityChaser::new(config, target)?;
    Ok(world.spawn((Transform::from_translation(position), chaser)).id())
}
