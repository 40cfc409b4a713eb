//! Proximity chase: простейший aggro
//!
//! Если target ближе `chase_distance`, двигаемся к нему по прямой со
//! скоростью `speed`. Никакого pathfinding, никаких состояний.

use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{require_non_negative, require_positive, sanitize_delta, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChaserConfig {
    /// Радиус, внутри которого начинаем погоню (метры)
    pub chase_distance: f32,
    /// Скорость движения (m/s)
    pub speed: f32,
}

impl ChaserConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("chaser.chase_distance", self.chase_distance)?;
        require_non_negative("chaser.speed", self.speed)?;
        Ok(())
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ProximityChaser {
    config: ChaserConfig,
    target: Entity,
}

impl ProximityChaser {
    pub fn new(config: ChaserConfig, target: Entity) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, target })
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    pub fn config(&self) -> &ChaserConfig {
        &self.config
    }
}

/// Смещение за кадр
///
/// - distance ≥ chase_distance → ноль
/// - self == target → ноль (normalize нулевого вектора не делаем)
/// - иначе unit direction × speed × dt (шаг не укорачивается у target)
pub fn chase_displacement(position: Vec3, target: Vec3, config: &ChaserConfig, delta: f32) -> Vec3 {
    let offset = target - position;
    let distance = offset.length();

    if !distance.is_finite() || distance >= config.chase_distance {
        return Vec3::ZERO;
    }

    offset.normalize_or_zero() * config.speed * sanitize_delta(delta)
}

/// Система: двигает всех chaser'ов к их target
///
/// Target пропал (despawn) → chaser просто стоит. Warning один раз на chaser.
pub fn chase_targets(
    chasers: Query<(Entity, &ProximityChaser)>,
    mut transforms: Query<&mut Transform>,
    time: Res<Time>,
    mut reported: Local<HashSet<Entity>>,
) {
    let delta = time.delta_secs();

    for (entity, chaser) in chasers.iter() {
        let Ok(target) = transforms.get(chaser.target).map(|t| t.translation) else {
            if reported.insert(entity) {
                crate::logger::log_warning(&format!(
                    "chase: target {:?} of {:?} is gone, idling",
                    chaser.target, entity
                ));
            }
            continue;
        };

        let Ok(mut transform) = transforms.get_mut(entity) else {
            continue;
        };

        let displacement = chase_displacement(transform.translation, target, &chaser.config, delta);
        transform.translation += displacement;
    }
}
