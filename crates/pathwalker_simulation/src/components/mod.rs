//! Общие ECS компоненты
//!
//! - player: player control marker (Player)
//! - input: InputSnapshot (resource) + LocomotionInput (per-entity)

pub mod input;
pub mod player;

pub use input::*;
pub use player::*;
