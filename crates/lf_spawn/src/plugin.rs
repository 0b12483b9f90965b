use bevy::prelude::*;
use lf_content::ContentTable;
use lf_core::{FlyableKind, SpawnError};
use lf_factory::StrategyRegistry;

use crate::report::{FailureSink, LogSink};
use crate::scene::FlyableScene;
use crate::scheduler::SpawnScheduler;

/// System set containing the spawn control, spawn and scene update systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpawnSystems;

/// Host requests to the spawner.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SpawnControl {
    /// Start (or restart) spawning at the given interval.
    Start { interval_secs: f32 },
    /// Stop spawning. Flyables already in flight keep going.
    Stop,
    /// Spawn only this kind, or `None` to pick randomly.
    PinKind(Option<FlyableKind>),
}

/// Sent for every flyable launched by the scheduler.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct FlyableLaunched {
    pub content_id: String,
}

/// Sent for every spawn that was skipped.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnFailed(pub SpawnError);

/// Applies queued [`SpawnControl`] requests.
pub fn apply_spawn_controls(
    mut controls: EventReader<SpawnControl>,
    mut scheduler: ResMut<SpawnScheduler>,
) {
    for control in controls.read() {
        match control {
            SpawnControl::Start { interval_secs } => match scheduler.start(*interval_secs) {
                Ok(handle) => info!("spawning every {}s ({:?})", interval_secs, handle),
                Err(err) => error!("cannot start spawner: {}", err),
            },
            SpawnControl::Stop => {
                if let Some(handle) = scheduler.stop() {
                    info!("spawner stopped ({:?})", handle);
                }
            }
            SpawnControl::PinKind(kind) => {
                scheduler.pin_kind(*kind);
                match kind {
                    Some(kind) => info!("spawning only {}", kind),
                    None => info!("spawning random kinds"),
                }
            }
        }
    }
}

/// Advances the scheduler by the frame delta and hands launched flyables to the scene.
pub fn drive_spawner(
    time: Res<Time>,
    mut scheduler: ResMut<SpawnScheduler>,
    registry: Res<StrategyRegistry>,
    content: Res<ContentTable>,
    mut scene: ResMut<FlyableScene>,
    mut launched: EventWriter<FlyableLaunched>,
    mut failed: EventWriter<SpawnFailed>,
) {
    let mut failures: Vec<SpawnError> = Vec::new();
    let flyables = scheduler.tick(time.delta(), &registry, &content, &mut failures);

    for flyable in flyables {
        if let Some(entry) = flyable.content() {
            launched.send(FlyableLaunched {
                content_id: entry.id.clone(),
            });
        }
        scene.adopt(flyable);
    }

    for error in failures {
        LogSink.report(&error);
        failed.send(SpawnFailed(error));
    }
}

/// Updates flyables in flight and drops destroyed ones.
pub fn update_scene(time: Res<Time>, mut scene: ResMut<FlyableScene>) {
    let dropped = scene.update(time.delta());
    if dropped > 0 {
        debug!("dropped {} finished flyables, {} in flight", dropped, scene.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LfSpawnPlugin;
    use bevy::time::{TimePlugin, TimeUpdateStrategy};
    use lf_core::{ContentEntry, VisualRef};
    use lf_factory::{BalloonStrategy, BubbleStrategy, StrategyBinding};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Resource, Default)]
    struct Seen {
        launched: Vec<String>,
        failed: Vec<SpawnError>,
    }

    fn record(
        mut launched: EventReader<FlyableLaunched>,
        mut failed: EventReader<SpawnFailed>,
        mut seen: ResMut<Seen>,
    ) {
        seen.launched
            .extend(launched.read().map(|event| event.content_id.clone()));
        seen.failed.extend(failed.read().map(|event| event.0.clone()));
    }

    fn test_app(registry: StrategyRegistry) -> App {
        let content = ContentTable::new(
            "en",
            vec![
                ContentEntry::new("a1", "A", VisualRef::default()),
                ContentEntry::new("a2", "B", VisualRef::default()),
            ],
        )
        .unwrap();

        let mut app = App::new();
        app.add_plugins(TimePlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(registry)
            .insert_resource(content)
            .init_resource::<Seen>()
            .add_plugins(LfSpawnPlugin {
                seed: Some(7),
                autostart: None,
            })
            .add_systems(Last, record);
        app
    }

    fn two_kinds() -> StrategyRegistry {
        StrategyRegistry::from_bindings([
            StrategyBinding::new(FlyableKind::Balloon, Arc::new(BalloonStrategy::new(1))),
            StrategyBinding::new(FlyableKind::Bubble, Arc::new(BubbleStrategy::new(2))),
        ])
    }

    #[test]
    fn host_resources_are_kept() {
        let app = test_app(two_kinds());
        assert_eq!(app.world().resource::<StrategyRegistry>().len(), 2);
        assert_eq!(app.world().resource::<ContentTable>().len(), 2);
    }

    #[test]
    fn started_spawner_fills_the_scene() {
        let mut app = test_app(two_kinds());
        app.world_mut()
            .send_event(SpawnControl::Start { interval_secs: 0.25 });

        for _ in 0..11 {
            app.update();
        }

        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.launched.len(), 4, "launched {:?}", seen.launched);
        assert!(seen.failed.is_empty());
        assert_eq!(app.world().resource::<FlyableScene>().len(), 4);
    }

    #[test]
    fn stop_control_halts_spawning() {
        let mut app = test_app(two_kinds());
        app.world_mut()
            .send_event(SpawnControl::Start { interval_secs: 0.25 });
        app.update();
        app.world_mut().send_event(SpawnControl::Stop);
        for _ in 0..10 {
            app.update();
        }

        assert!(!app.world().resource::<SpawnScheduler>().is_running());
        assert!(app.world().resource::<FlyableScene>().is_empty());
    }

    #[test]
    fn failures_become_events() {
        let mut app = test_app(StrategyRegistry::default());
        app.world_mut()
            .send_event(SpawnControl::Start { interval_secs: 0.25 });

        for _ in 0..11 {
            app.update();
        }

        let seen = app.world().resource::<Seen>();
        assert!(seen.launched.is_empty());
        assert_eq!(seen.failed.len(), 4);
        assert!(seen.failed.iter().all(|e| *e == SpawnError::EmptyRegistry));
        assert!(app.world().resource::<SpawnScheduler>().is_running());
    }

    #[test]
    fn pinning_kind_through_events() {
        let mut app = test_app(two_kinds());
        app.world_mut()
            .send_event(SpawnControl::PinKind(Some(FlyableKind::Heart)));
        app.world_mut()
            .send_event(SpawnControl::Start { interval_secs: 0.25 });

        for _ in 0..4 {
            app.update();
        }

        assert_eq!(
            app.world().resource::<SpawnScheduler>().pinned_kind(),
            Some(FlyableKind::Heart)
        );
        let seen = app.world().resource::<Seen>();
        assert_eq!(
            seen.failed,
            vec![SpawnError::UnregisteredKind(FlyableKind::Heart)]
        );
    }
}
