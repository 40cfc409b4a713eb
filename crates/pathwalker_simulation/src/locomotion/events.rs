//! Locomotion events

use bevy::prelude::*;

/// Event: Grounded → Airborne (прыжок)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Jumped {
    pub entity: Entity,
    /// Вертикальная скорость в момент отрыва
    pub launch_velocity: f32,
}

/// Event: Airborne → Grounded после прыжка (edge, один раз на приземление)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landed {
    pub entity: Entity,
}
