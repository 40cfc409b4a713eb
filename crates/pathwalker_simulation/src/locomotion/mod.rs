//! Locomotion domain: ходьба/бег/прыжок + camera bob
//!
//! Содержит:
//! - LocomotionConfig (immutable tunables)
//! - LocomotionState / SpeedTier / LocomotionPhase
//! - step (чистая функция кадра)
//! - CameraBob (косметика jump/land)
//! - AnimationSink + AnimatorParameters
//! - Jumped / Landed events
//!
//! Host-зависимости (probe, mover, animator, camera) передаются явно и
//! проверяются при spawn.

use bevy::prelude::*;

use crate::components::LocomotionInput;
use crate::config::{require_finite, ConfigError};

pub mod animation;
pub mod bob;
pub mod config;
pub mod controller;
pub mod events;
pub mod state;
pub mod systems;

pub use animation::{AnimationSink, AnimatorParameters, PARAM_IS_JUMPING, PARAM_SPEED};
pub use bob::CameraBob;
pub use config::LocomotionConfig;
pub use controller::{step, FrameMotion, GROUNDED_VERTICAL_VELOCITY, SPEED_DAMP_TIME};
pub use events::{Jumped, Landed};
pub use state::{LocomotionPhase, LocomotionState, SpeedTier};
pub use systems::{recover_camera_bob, update_locomotion};

/// Контроллер: конфиг + явные ссылки на camera и animator entity
#[derive(Component, Debug, Clone, Copy)]
pub struct LocomotionController {
    config: LocomotionConfig,
    camera: Entity,
    animator: Entity,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig, camera: Entity, animator: Entity) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            camera,
            animator,
        })
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn camera(&self) -> Entity {
        self.camera
    }

    pub fn animator(&self) -> Entity {
        self.animator
    }
}

/// Entity одного locomotion персонажа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocomotionRig {
    pub body: Entity,
    pub camera: Entity,
    pub animator: Entity,
}

/// Вешает контроллер на существующий `body`
///
/// Camera и animator: внешние entity, их наличие проверяется здесь же.
/// Rest position камеры берётся из её текущего local Transform.
pub fn attach_locomotion(
    world: &mut World,
    body: Entity,
    config: LocomotionConfig,
    camera: Entity,
    animator: Entity,
) -> Result<LocomotionRig, ConfigError> {
    if world.get::<Transform>(body).is_none() {
        return Err(ConfigError::MissingReference {
            role: "locomotion body",
            entity: body,
            component: "Transform",
        });
    }

    let Some(camera_rest) = world.get::<Transform>(camera).map(|t| t.translation) else {
        return Err(ConfigError::MissingReference {
            role: "locomotion camera",
            entity: camera,
            component: "Transform",
        });
    };

    if world.get::<AnimatorParameters>(animator).is_none() {
        return Err(ConfigError::MissingReference {
            role: "locomotion animator",
            entity: animator,
            component: "AnimatorParameters",
        });
    }

    let controller = LocomotionController::new(config, camera, animator)?;

    world.entity_mut(body).insert((
        controller,
        LocomotionState::new(config.walk_speed),
        LocomotionInput::default(),
        CameraBob::new(camera_rest),
    ));

    Ok(LocomotionRig {
        body,
        camera,
        animator,
    })
}

/// Spawn helper: body + camera (child, на высоте глаз) + animator (child)
pub fn spawn_locomotion_character(
    world: &mut World,
    config: LocomotionConfig,
    position: Vec3,
    eye_height: f32,
) -> Result<LocomotionRig, ConfigError> {
    config.validate()?;
    require_finite("eye_height", eye_height)?;

    let body = world.spawn(Transform::from_translation(position)).id();
    let camera = world
        .spawn((Transform::from_xyz(0.0, eye_height, 0.0), ChildOf(body)))
        .id();
    let animator = world
        .spawn((Transform::default(), AnimatorParameters::default(), ChildOf(body)))
        .id();

    attach_locomotion(world, body, config, camera, animator)
}
