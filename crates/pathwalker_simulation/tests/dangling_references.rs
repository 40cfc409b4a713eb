//! Dangling references в runtime
//!
//! Отдельный test binary: подменяет global logger, поэтому тут один тест.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::prelude::*;
use pathwalker_simulation::logger::{set_log_level, set_logger, LogLevel, LogPrinter};
use pathwalker_simulation::*;

/// Собирает warning'и вместо печати
struct CollectingLogger {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl LogPrinter for CollectingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Warning {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }
}

#[test]
fn test_missing_target_and_animator_warn_once() {
    let warnings = Arc::new(Mutex::new(Vec::new()));
    set_logger(Box::new(CollectingLogger {
        warnings: warnings.clone(),
    }));
    set_log_level(LogLevel::Warning);

    let mut app = create_headless_app(3);
    app.add_plugins(BehavioursPlugin)
        .insert_resource(StaticWorld::with_ground_plane(0.0, 100.0));
    use_manual_frame_time(&mut app, Duration::from_secs_f32(1.0 / 60.0));

    let demo = BehaviourConfig::demo();
    let world = app.world_mut();
    let target = world.spawn(Transform::default()).id();
    let start = Vec3::new(2.0, 0.0, 0.0);
    let chaser = spawn_chaser(world, demo.chaser, target, start).unwrap();
    let rig = spawn_locomotion_character(world, demo.locomotion, Vec3::new(-5.0, 0.0, 0.0), 1.6).unwrap();

    world.despawn(target);
    world.despawn(rig.animator);

    for _ in 0..30 {
        app.update();
    }

    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 2, "{:?}", *warnings);
    assert!(warnings.iter().any(|w| w.contains("chase: target")));
    assert!(warnings.iter().any(|w| w.contains("locomotion: animator")));

    // Оба продолжают жить, просто стоят
    assert_eq!(app.world().get::<Transform>(chaser).unwrap().translation, start);
    assert_eq!(
        app.world().get::<Transform>(rig.body).unwrap().translation,
        Vec3::new(-5.0, 0.0, 0.0)
    );
}
