//! PATHWALKER Simulation Core
//!
//! Gameplay поведения как headless ECS (Bevy 0.16):
//! - camera: mouse-look yaw pivot'а
//! - ai: proximity chase
//! - locomotion: walk/run/jump + camera bob
//!
//! Host engine (рендер, физика, input, анимация): внешний. Его сервисы
//! приходят через seams: `InputSnapshot`, `GroundProbe`/`KinematicMover`,
//! `AnimationSink`, `Time`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformSystem;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod camera;
pub mod components;
pub mod config;
pub mod locomotion;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use ai::{spawn_chaser, ChaserConfig, ProximityChaser};
pub use camera::{spawn_orbit_camera, CameraOrbit, CameraOrbitConfig};
pub use components::*;
pub use config::{BehaviourConfig, ConfigError};
pub use locomotion::{
    attach_locomotion, spawn_locomotion_character, AnimatorParameters, CameraBob, Jumped, Landed,
    LocomotionConfig, LocomotionController, LocomotionPhase, LocomotionRig, LocomotionState,
    SpeedTier,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::{layer_mask, StaticCollider, StaticWorld, LAYER_GROUND, LAYER_OBSTACLE};

/// Порядок кадра
///
/// Update: Input → Logic. PostUpdate: Late (до transform propagation).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviourSet {
    /// InputSnapshot → per-entity input
    Input,
    /// Orbit, locomotion, chase
    Logic,
    /// Косметика камеры после всех transitions
    Late,
}

/// Главный plugin (все поведения + их ресурсы и события)
pub struct BehavioursPlugin;

impl Plugin for BehavioursPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .init_resource::<StaticWorld>()
            .add_event::<Jumped>()
            .add_event::<Landed>()
            .configure_sets(Update, (BehaviourSet::Input, BehaviourSet::Logic).chain())
            .configure_sets(
                PostUpdate,
                BehaviourSet::Late.before(TransformSystem::TransformPropagate),
            )
            .add_systems(
                Update,
                components::distribute_player_input.in_set(BehaviourSet::Input),
            )
            .add_systems(
                Update,
                (
                    // Yaw до движения: locomotion видит уже новую ориентацию
                    camera::orbit_camera_yaw,
                    locomotion::update_locomotion,
                    ai::chase_targets,
                )
                    .chain() // Последовательное выполнение для детерминизма
                    .in_set(BehaviourSet::Logic),
            )
            .add_systems(
                PostUpdate,
                locomotion::recover_camera_bob.in_set(BehaviourSet::Late),
            );
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Используется для синтетического input в headless прогонах.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Фиксирует длительность кадра (вместо wall clock)
///
/// Первый `app.update()` после этого всё равно даёт delta = 0: так
/// Bevy инициализирует Time.
pub fn use_manual_frame_time(app: &mut App, frame: Duration) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
}

/// Snapshot компонентов для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
