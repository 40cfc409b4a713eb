//! Physics seam: ground probe + collision-aware mover
//!
//! Настоящая физика живёт в host engine. Здесь только traits и headless
//! реализация на Rapier shapes (для тестов и демо).

pub mod world;

pub use world::{
    layer_mask,
    GroundProbe,
    KinematicMover,
    StaticCollider,
    StaticWorld,
    LAYER_GROUND,
    LAYER_OBSTACLE,
};
