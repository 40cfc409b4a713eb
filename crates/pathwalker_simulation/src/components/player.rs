//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Только entity с этим компонентом получают `LocomotionInput` из
/// `InputSnapshot`. Остальные двигаются своими системами (chase и т.п.).
///
/// # Single-player
/// Обычно один entity. Если маркер висит на нескольких: все получают
/// один и тот же snapshot.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
