//! Конфигурация поведений
//!
//! Все tunable поля задаются интегратором (JSON или код), дефолтов нет.
//! Валидация eager: при загрузке и при создании компонентов.

use std::path::{Path, PathBuf};

use bevy::prelude::Entity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::ChaserConfig;
use crate::camera::CameraOrbitConfig;
use crate::locomotion::LocomotionConfig;

/// Ошибки конфигурации и инициализации
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("ground probe layer mask is empty")]
    EmptyGroundMask,

    #[error("{role} reference {entity:?} has no {component}")]
    MissingReference {
        role: &'static str,
        entity: Entity,
        component: &'static str,
    },

    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Полный конфиг headless сцены: по секции на поведение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviourConfig {
    pub camera: CameraOrbitConfig,
    pub chaser: ChaserConfig,
    pub locomotion: LocomotionConfig,
}

impl BehaviourConfig {
    /// Значения для headless демо (когда конфиг-файл не передан)
    pub fn demo() -> Self {
        Self {
            camera: CameraOrbitConfig { sensitivity: 0.15 },
            chaser: ChaserConfig {
                chase_distance: 10.0,
                speed: 5.0,
            },
            locomotion: LocomotionConfig {
                walk_speed: 2.0,
                run_speed: 6.0,
                ground_check_radius: 0.2,
                ground_mask: crate::physics::LAYER_GROUND.bits(),
                gravity: -9.81,
                jump_height: 1.2,
                jump_bob_offset: 0.1,
                land_bob_offset: 0.15,
                bob_return_speed: 8.0,
            },
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.chaser.validate()?;
        self.locomotion.validate()
    }
}

pub(crate) fn require_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: ">= 0",
            value,
        })
    }
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "> 0",
            value,
        })
    }
}

/// Frame delta из host'а: NaN/inf/отрицательное → 0 (safe no-op)
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_JSON: &str = r#"{
        "camera": { "sensitivity": 0.15 },
        "chaser": { "chase_distance": 10.0, "speed": 5.0 },
        "locomotion": {
            "walk_speed": 2.0,
            "run_speed": 6.0,
            "ground_check_radius": 0.2,
            "ground_mask": 1,
            "gravity": -9.81,
            "jump_height": 1.2,
            "jump_bob_offset": 0.1,
            "land_bob_offset": 0.15,
            "bob_return_speed": 8.0
        }
    }"#;

    #[test]
    fn test_demo_matches_json_and_validates() {
        let config = BehaviourConfig::from_json(DEMO_JSON).expect("valid config");
        assert_eq!(config, BehaviourConfig::demo());
        assert!(BehaviourConfig::demo().validate().is_ok());
    }

    #[test]
    fn test_shipped_demo_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/demo.json");
        let config = BehaviourConfig::load(path).expect("shipped config is valid");
        assert_eq!(config, BehaviourConfig::demo());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let text = r#"{ "camera": {}, "chaser": { "chase_distance": 1.0, "speed": 1.0 } }"#;
        assert!(matches!(BehaviourConfig::from_json(text), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_value_is_rejected_at_load() {
        let text = DEMO_JSON.replace("\"ground_mask\": 1", "\"ground_mask\": 0");
        assert!(matches!(
            BehaviourConfig::from_json(&text),
            Err(ConfigError::EmptyGroundMask)
        ));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let result = BehaviourConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_sanitize_delta() {
        assert_eq!(sanitize_delta(0.016), 0.016);
        assert_eq!(sanitize_delta(-0.5), 0.0);
        assert_eq!(sanitize_delta(f32::NAN), 0.0);
        assert_eq!(sanitize_delta(f32::INFINITY), 0.0);
    }
}
