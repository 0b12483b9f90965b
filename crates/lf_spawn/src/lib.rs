use bevy::prelude::*;

pub mod plugin;
pub mod report;
pub mod scene;
pub mod scheduler;

pub use plugin::{FlyableLaunched, SpawnControl, SpawnFailed, SpawnSystems};
pub use report::{FailureSink, LogSink};
pub use scene::FlyableScene;
pub use scheduler::{SpawnScheduler, TimerHandle};

/// Spawning plugin for Letterfly.
/// Drives the spawn scheduler from frame time and owns launched flyables.
///
/// The host inserts [`StrategyRegistry`](lf_factory::StrategyRegistry) and
/// [`ContentTable`](lf_content::ContentTable) resources; both fall back to
/// defaults (empty registry, A–Z alphabet) when absent.
#[derive(Default)]
pub struct LfSpawnPlugin {
    /// Seed for content and strategy selection. Entropy when `None`.
    pub seed: Option<u64>,
    /// Start spawning at this interval as soon as the app runs.
    pub autostart: Option<f32>,
}

impl Plugin for LfSpawnPlugin {
    fn build(&self, app: &mut App) {
        let scheduler = match self.seed {
            Some(seed) => SpawnScheduler::with_seed(seed),
            None => SpawnScheduler::default(),
        };

        app.insert_resource(scheduler)
            .init_resource::<FlyableScene>()
            .init_resource::<lf_factory::StrategyRegistry>()
            .init_resource::<lf_content::ContentTable>()
            .add_event::<SpawnControl>()
            .add_event::<FlyableLaunched>()
            .add_event::<SpawnFailed>()
            .add_systems(
                Update,
                (
                    plugin::apply_spawn_controls,
                    plugin::drive_spawner,
                    plugin::update_scene,
                )
                    .chain()
                    .in_set(SpawnSystems),
            );

        if let Some(interval_secs) = self.autostart {
            app.world_mut()
                .send_event(SpawnControl::Start { interval_secs });
        }
    }
}
