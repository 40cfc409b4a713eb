//! Locomotion step: один кадр state machine
//!
//! Grounded-{Idle,Walk,Run} ⇄ Airborne. Чистая функция над состоянием:
//! probe результат и input приходят снаружи, наружу уходят два delta для
//! collision-aware mover'а (горизонталь и вертикаль раздельно).

use bevy::prelude::*;

use super::animation::{AnimationSink, PARAM_IS_JUMPING, PARAM_SPEED};
use super::bob::CameraBob;
use super::config::LocomotionConfig;
use super::state::{LocomotionState, SpeedTier};
use crate::components::LocomotionInput;
use crate::config::sanitize_delta;

/// Вертикальная скорость на земле: держит probe прижатым на склонах
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Time constant сглаживания `Speed` параметра (секунды)
pub const SPEED_DAMP_TIME: f32 = 0.1;

/// Результат кадра
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMotion {
    /// World-space горизонтальный delta (уже × dt)
    pub horizontal: Vec3,
    /// World-space вертикальный delta (уже × dt)
    pub vertical: Vec3,
    /// Some(v): в этом кадре был прыжок с launch velocity v
    pub launch_velocity: Option<f32>,
    /// В этом кадре закончился прыжок
    pub landed: bool,
}

/// Один кадр locomotion
///
/// Порядок:
/// 1. probe → `is_grounded`
/// 2. опора (probe ∧ v ≤ 0): снять `is_jumping` (edge), прижать v
/// 3. на опоре: speed tier + jump; в воздухе: v += g·dt
/// 4. animator `IsJumping` = не на опоре (после переходов)
/// 5. delta'ы движения
#[allow(clippy::too_many_arguments)]
pub fn step(
    config: &LocomotionConfig,
    state: &mut LocomotionState,
    bob: &mut CameraBob,
    input: &LocomotionInput,
    orientation: Quat,
    grounded_probe: bool,
    delta: f32,
    animator: &mut impl AnimationSink,
) -> FrameMotion {
    let delta = sanitize_delta(delta);
    let mut motion = FrameMotion::default();

    state.is_grounded = grounded_probe;

    let supported = state.is_supported();
    if supported {
        if state.is_jumping {
            state.is_jumping = false;
            bob.nudge(-config.land_bob_offset);
            motion.landed = true;
        }
        state.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
    }

    let direction = input.local_direction();

    if supported {
        let tier = SpeedTier::select(direction != Vec3::ZERO, input.run_held);
        state.speed_tier = tier;
        match tier {
            SpeedTier::Walk => state.move_speed = config.walk_speed,
            SpeedTier::Run => state.move_speed = config.run_speed,
            SpeedTier::Idle => {}
        }
        animator.set_float_damped(PARAM_SPEED, tier.animation_speed(), SPEED_DAMP_TIME, delta);

        if input.jump_pressed && !state.is_jumping {
            let launch = config.launch_velocity();
            state.vertical_velocity = launch;
            state.is_jumping = true;
            bob.nudge(config.jump_bob_offset);
            motion.launch_velocity = Some(launch);
        }
    } else {
        state.vertical_velocity += config.gravity * delta;
    }

    // Совпадает с phase(): в кадр отрыва probe ещё видит землю, но v > 0
    animator.set_bool(PARAM_IS_JUMPING, !state.is_supported());

    // В воздухе скорость остаётся от последнего grounded tier (air control)
    let horizontal = orientation * (direction * state.move_speed) * delta;
    let vertical = Vec3::Y * state.vertical_velocity * delta;

    motion.horizontal = if horizontal.is_finite() { horizontal } else { Vec3::ZERO };
    motion.vertical = if vertical.is_finite() { vertical } else { Vec3::ZERO };
    motion
}
