pub mod settings;
pub mod settings_io;

pub use settings::{BindingSettings, ContentSettings, SpawnerSettings, StrategySettings};
pub use settings_io::{
    default_settings_path, load_or_create_settings, load_settings, save_settings,
    SettingsIoError, SETTINGS_DIR, SETTINGS_FILE,
};
