use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use lf_settings::{default_settings_path, load_or_create_settings};
use lf_spawn::{FlyableLaunched, FlyableScene, LfSpawnPlugin, SpawnScheduler, SpawnSystems};

/// Target frame time for the headless run loop (~60 fps).
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_TIME)),
        LogPlugin::default(),
    ));

    let settings = match load_or_create_settings(&default_settings_path()) {
        Ok(settings) => settings,
        Err(err) => {
            error!("failed to load spawner settings: {}", err);
            return AppExit::error();
        }
    };

    // Catch misconfigured templates before the first spawn.
    let registry = match settings.build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            error!("invalid strategy configuration: {}", err);
            return AppExit::error();
        }
    };
    if let Err(err) = registry.validate() {
        error!("invalid strategy configuration: {}", err);
        return AppExit::error();
    }
    let content = match settings.build_content() {
        Ok(content) => content,
        Err(err) => {
            error!("invalid content table: {}", err);
            return AppExit::error();
        }
    };

    info!(
        "{} strategy bindings ({} kinds), {} content entries [{}]",
        registry.len(),
        registry.kinds().len(),
        content.len(),
        content.locale()
    );

    app.insert_resource(registry)
        .insert_resource(content)
        .add_plugins(LfSpawnPlugin {
            seed: Some(settings.seed),
            autostart: settings.autostart.then_some(settings.interval_secs),
        })
        .add_systems(Update, log_launches.after(SpawnSystems));

    app.world_mut()
        .resource_mut::<SpawnScheduler>()
        .pin_kind(settings.pinned_kind);

    app.run()
}

fn log_launches(mut launched: EventReader<FlyableLaunched>, scene: Res<FlyableScene>) {
    for event in launched.read() {
        info!("launched '{}' ({} in flight)", event.content_id, scene.len());
    }
}
