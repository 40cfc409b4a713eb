//! Input snapshot: то, что host engine опросил за кадр
//!
//! Host заполняет `InputSnapshot` до `BehaviourSet::Input`; дальше
//! `distribute_player_input` раскладывает его по player entity.
//! Для headless тестов: пишем snapshot руками.

use bevy::prelude::*;

use super::Player;

/// Resource: состояние input за текущий кадр
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Horizontal (x) / Vertical (y) оси движения, [-1, 1]
    pub move_axis: Vec2,
    /// Run modifier зажат
    pub run_held: bool,
    /// Jump нажат именно в этом кадре (edge, не hold)
    pub jump_pressed: bool,
    /// Горизонтальный pointer delta
    pub pointer_delta_x: f32,
}

/// Input конкретного locomotion entity
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionInput {
    pub move_axis: Vec2,
    pub run_held: bool,
    pub jump_pressed: bool,
}

impl LocomotionInput {
    /// Local-space направление (x = strafe, -z = forward как в Bevy), normalized
    ///
    /// Non-finite или нулевой axis → Vec3::ZERO.
    pub fn local_direction(&self) -> Vec3 {
        let raw = Vec3::new(self.move_axis.x, 0.0, -self.move_axis.y);
        if raw.is_finite() {
            raw.normalize_or_zero()
        } else {
            Vec3::ZERO
        }
    }
}

impl From<&InputSnapshot> for LocomotionInput {
    fn from(snapshot: &InputSnapshot) -> Self {
        Self {
            move_axis: snapshot.move_axis,
            run_held: snapshot.run_held,
            jump_pressed: snapshot.jump_pressed,
        }
    }
}

/// Система: snapshot → LocomotionInput на всех `Player`
pub fn distribute_player_input(
    snapshot: Res<InputSnapshot>,
    mut players: Query<&mut LocomotionInput, With<Player>>,
) {
    let input = LocomotionInput::from(snapshot.as_ref());
    for mut player_input in players.iter_mut() {
        *player_input = input;
    }
}
