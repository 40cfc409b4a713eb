//! Animation parameter sink
//!
//! Blending делает host engine; контроллер только пишет именованные
//! параметры. `AnimatorParameters`: headless реализация (хранит значения).

use std::collections::HashMap;

use bevy::prelude::*;

/// Float: нормализованная скорость движения (Idle 0 / Walk 0.5 / Run 1)
pub const PARAM_SPEED: &str = "Speed";
/// Bool: в воздухе (true пока probe не видит землю)
pub const PARAM_IS_JUMPING: &str = "IsJumping";

pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);

    /// Плавное приближение к `target` с time constant `damp_time`
    fn set_float_damped(&mut self, name: &str, target: f32, damp_time: f32, delta: f32);

    fn set_bool(&mut self, name: &str, value: bool);
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorParameters {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
}

impl AnimatorParameters {
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }
}

/// Экспоненциальное сглаживание: без overshoot, damp_time ≤ 0 → snap
pub fn damp_towards(current: f32, target: f32, damp_time: f32, delta: f32) -> f32 {
    if !damp_time.is_finite() || damp_time <= 0.0 {
        return target;
    }

    let blend = 1.0 - (-delta.max(0.0) / damp_time).exp();
    current + (target - current) * blend
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        if value.is_finite() {
            self.floats.insert(name.to_owned(), value);
        }
    }

    fn set_float_damped(&mut self, name: &str, target: f32, damp_time: f32, delta: f32) {
        let current = self.float(name).unwrap_or(0.0);
        self.set_float(name, damp_towards(current, target, damp_time, delta));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }
}
