//! Camera bob: косметическое смещение камеры на прыжке/приземлении
//!
//! Nudge'и пишутся в логике кадра, возврат к rest: в late pass.

use bevy::prelude::*;

use crate::config::sanitize_delta;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraBob {
    /// Local position камеры в покое
    pub rest_position: Vec3,
    /// Текущее отклонение от rest
    pub current_offset: Vec3,
}

impl CameraBob {
    pub fn new(rest_position: Vec3) -> Self {
        Self {
            rest_position,
            current_offset: Vec3::ZERO,
        }
    }

    /// Сдвиг по world up (+ вверх, - вниз)
    pub fn nudge(&mut self, amount: f32) {
        if amount.is_finite() {
            self.current_offset.y += amount;
        }
    }

    /// offset = lerp(offset, 0, clamp(return_speed × dt, 0, 1))
    ///
    /// Каждый кадр |offset| умножается на (1 - t) → монотонно к нулю.
    pub fn recover(&mut self, return_speed: f32, delta: f32) {
        let t = (return_speed * sanitize_delta(delta)).clamp(0.0, 1.0);
        if t.is_nan() {
            return;
        }
        self.current_offset = self.current_offset.lerp(Vec3::ZERO, t);
    }

    pub fn local_position(&self) -> Vec3 {
        self.rest_position + self.current_offset
    }
}
