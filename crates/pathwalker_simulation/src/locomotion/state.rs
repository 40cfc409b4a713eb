//! Состояние locomotion (owned контроллером, мутируется только в step)

use bevy::prelude::*;

/// Speed tier для grounded движения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SpeedTier {
    #[default]
    Idle,
    Walk,
    Run,
}

impl SpeedTier {
    /// Нет input → Idle; input → Walk; input + run modifier → Run
    pub fn select(has_input: bool, run_held: bool) -> Self {
        match (has_input, run_held) {
            (false, _) => SpeedTier::Idle,
            (true, false) => SpeedTier::Walk,
            (true, true) => SpeedTier::Run,
        }
    }

    /// Target для animator параметра `Speed`
    pub fn animation_speed(self) -> f32 {
        match self {
            SpeedTier::Idle => 0.0,
            SpeedTier::Walk => 0.5,
            SpeedTier::Run => 1.0,
        }
    }
}

/// Фаза state machine (для логов и инспекции)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionPhase {
    GroundedIdle,
    GroundedWalk,
    GroundedRun,
    Airborne,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionState {
    /// Результат ground probe в последнем кадре
    pub is_grounded: bool,
    /// m/s, + вверх
    pub vertical_velocity: f32,
    /// Инвариант: true только между launch и приземлением
    pub is_jumping: bool,
    pub speed_tier: SpeedTier,
    /// Текущая горизонтальная скорость (сохраняется в воздухе)
    pub move_speed: f32,
}

impl LocomotionState {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            is_grounded: false,
            vertical_velocity: 0.0,
            is_jumping: false,
            speed_tier: SpeedTier::Idle,
            move_speed: initial_speed,
        }
    }

    /// Стоим ли на опоре: probe попал и не летим вверх
    pub fn is_supported(&self) -> bool {
        self.is_grounded && self.vertical_velocity <= 0.0
    }

    pub fn phase(&self) -> LocomotionPhase {
        if !self.is_supported() {
            return LocomotionPhase::Airborne;
        }

        match self.speed_tier {
            SpeedTier::Idle => LocomotionPhase::GroundedIdle,
            SpeedTier::Walk => LocomotionPhase::GroundedWalk,
            SpeedTier::Run => LocomotionPhase::GroundedRun,
        }
    }
}
