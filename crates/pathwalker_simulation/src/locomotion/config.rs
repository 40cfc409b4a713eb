//! Tunables locomotion контроллера

use bevy_rapier3d::prelude::Group;
use serde::{Deserialize, Serialize};

use crate::config::{require_finite, require_non_negative, ConfigError};
use crate::physics::layer_mask;

/// Immutable конфиг контроллера (валидируется при создании)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocomotionConfig {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Скорость бега с run modifier (m/s)
    pub run_speed: f32,
    /// Радиус sphere probe у ног
    pub ground_check_radius: f32,
    /// Layer mask walkable геометрии (биты Rapier `Group`)
    pub ground_mask: u32,
    /// Гравитация (m/s², отрицательная)
    pub gravity: f32,
    /// Желаемая высота апекса прыжка (метры)
    pub jump_height: f32,
    /// Смещение камеры вверх на прыжке
    pub jump_bob_offset: f32,
    /// Смещение камеры вниз на приземлении
    pub land_bob_offset: f32,
    /// Скорость возврата камеры к rest (1/сек)
    pub bob_return_speed: f32,
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("locomotion.walk_speed", self.walk_speed)?;
        require_non_negative("locomotion.run_speed", self.run_speed)?;
        require_non_negative("locomotion.ground_check_radius", self.ground_check_radius)?;
        require_non_negative("locomotion.jump_height", self.jump_height)?;
        require_non_negative("locomotion.jump_bob_offset", self.jump_bob_offset)?;
        require_non_negative("locomotion.land_bob_offset", self.land_bob_offset)?;
        require_non_negative("locomotion.bob_return_speed", self.bob_return_speed)?;

        let gravity = require_finite("locomotion.gravity", self.gravity)?;
        if gravity > 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "locomotion.gravity",
                expected: "<= 0",
                value: gravity,
            });
        }

        if self.ground_mask == 0 {
            return Err(ConfigError::EmptyGroundMask);
        }

        Ok(())
    }

    pub fn ground_groups(&self) -> Group {
        layer_mask(self.ground_mask)
    }

    /// Начальная вертикальная скорость для апекса `jump_height`: v = √(2·h·|g|)
    ///
    /// Нулевая гравитация → 0 (прыжок ничего не делает, но и не ломает transform).
    pub fn launch_velocity(&self) -> f32 {
        (self.jump_height * 2.0 * self.gravity.abs()).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LocomotionConfig {
        LocomotionConfig {
            walk_speed: 2.0,
            run_speed: 6.0,
            ground_check_radius: 0.2,
            ground_mask: 1,
            gravity: -9.81,
            jump_height: 1.2,
            jump_bob_offset: 0.1,
            land_bob_offset: 0.15,
            bob_return_speed: 8.0,
        }
    }

    #[test]
    fn test_launch_velocity_reaches_apex() {
        let cfg = config();
        let v = cfg.launch_velocity();
        assert!((v * v - 2.0 * cfg.jump_height * cfg.gravity.abs()).abs() < 1e-4);
    }

    #[test]
    fn test_zero_gravity_launch_is_zero() {
        let cfg = LocomotionConfig {
            gravity: 0.0,
            ..config()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.launch_velocity(), 0.0);
    }

    #[test]
    fn test_positive_gravity_rejected() {
        let cfg = LocomotionConfig {
            gravity: 9.81,
            ..config()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange { field: "locomotion.gravity", .. })));
    }

    #[test]
    fn test_non_finite_rejected() {
        let cfg = LocomotionConfig {
            run_speed: f32::INFINITY,
            ..config()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn test_empty_mask_rejected() {
        let cfg = LocomotionConfig {
            ground_mask: 0,
            ..config()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGroundMask)));
    }
}
