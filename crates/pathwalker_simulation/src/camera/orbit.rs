//! Mouse-look: yaw pivot'а от горизонтального pointer delta

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::InputSnapshot;
use crate::config::{require_finite, sanitize_delta, ConfigError};

/// Tunables камеры
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraOrbitConfig {
    /// Радианы yaw на единицу pointer delta в секунду
    pub sensitivity: f32,
}

impl CameraOrbitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("camera.sensitivity", self.sensitivity)?;
        Ok(())
    }
}

/// Камера, вращающая pivot (обычно тело игрока) вокруг world up
///
/// Pivot передаётся явно: никаких поисков "родителя" в runtime.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraOrbit {
    config: CameraOrbitConfig,
    pivot: Entity,
}

impl CameraOrbit {
    pub fn new(config: CameraOrbitConfig, pivot: Entity) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, pivot })
    }

    pub fn pivot(&self) -> Entity {
        self.pivot
    }

    pub fn config(&self) -> &CameraOrbitConfig {
        &self.config
    }
}

/// Угол yaw за кадр: delta × sensitivity × dt
///
/// Нет input (0) → 0. Non-finite → 0, чтобы NaN не попал в rotation.
pub fn yaw_delta(pointer_delta_x: f32, sensitivity: f32, delta: f32) -> f32 {
    let angle = pointer_delta_x * sensitivity * sanitize_delta(delta);
    if angle.is_finite() {
        angle
    } else {
        0.0
    }
}

/// Система: применяет pointer yaw к pivot каждого CameraOrbit
pub fn orbit_camera_yaw(
    cameras: Query<&CameraOrbit>,
    mut transforms: Query<&mut Transform>,
    input: Res<InputSnapshot>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for orbit in cameras.iter() {
        let angle = yaw_delta(input.pointer_delta_x, orbit.config.sensitivity, delta);
        if angle == 0.0 {
            continue;
        }

        if let Ok(mut pivot) = transforms.get_mut(orbit.pivot) {
            pivot.rotate_y(angle);
        }
    }
}
