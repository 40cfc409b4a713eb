//! Camera domain: mouse-look yaw
//!
//! Камера сама не двигается: она поворачивает свой pivot (тело игрока).
//! Bob-смещение камеры принадлежит locomotion (см. `locomotion::bob`).

use bevy::prelude::*;

use crate::config::ConfigError;

pub mod orbit;

pub use orbit::{orbit_camera_yaw, yaw_delta, CameraOrbit, CameraOrbitConfig};

/// Spawn helper: CameraOrbit с проверкой pivot
///
/// Pivot без Transform: ошибка конфигурации, ловим сразу.
pub fn spawn_orbit_camera(
    world: &mut World,
    config: CameraOrbitConfig,
    pivot: Entity,
) -> Result<Entity, ConfigError> {
    if world.get::<Transform>(pivot).is_none() {
        return Err(ConfigError::MissingReference {
            role: "camera pivot",
            entity: pivot,
            component: "Transform",
        });
    }

    let orbit = CameraOrbit::new(config, pivot)?;
    Ok(world.spawn(orbit).id())
}
