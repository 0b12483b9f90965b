use std::fs;
use std::path::{Path, PathBuf};

use bevy::log::info;
use lf_core::SpawnError;

use crate::settings::SpawnerSettings;

/// Directory and file the host reads its spawner settings from.
pub const SETTINGS_DIR: &str = "assets/config";
pub const SETTINGS_FILE: &str = "spawner.ron";

/// Where loading or saving spawner settings went wrong.
///
/// File-system failures carry the path they were about.
#[derive(Debug)]
pub enum SettingsIoError {
    Read { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: ron::error::SpannedError },
    Serialize(ron::Error),
    Invalid(SpawnError),
}

impl From<SpawnError> for SettingsIoError {
    fn from(err: SpawnError) -> Self {
        Self::Invalid(err)
    }
}

impl std::fmt::Display for SettingsIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            Self::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => write!(f, "{}:{}", path.display(), source),
            Self::Serialize(e) => write!(f, "cannot serialize settings: {}", e),
            Self::Invalid(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

/// `assets/config/spawner.ron`, relative to the working directory.
pub fn default_settings_path() -> PathBuf {
    Path::new(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Save spawner settings to a RON file, creating its parent directory.
pub fn save_settings(path: &Path, settings: &SpawnerSettings) -> Result<(), SettingsIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true);
    let ron_string =
        ron::ser::to_string_pretty(settings, pretty_config).map_err(SettingsIoError::Serialize)?;

    let write_err = |source| SettingsIoError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    fs::write(path, ron_string).map_err(write_err)
}

/// Load spawner settings from a RON file and validate them.
pub fn load_settings(path: &Path) -> Result<SpawnerSettings, SettingsIoError> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: SpawnerSettings =
        ron::from_str(&contents).map_err(|source| SettingsIoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate()?;
    Ok(settings)
}

/// Load the settings at `path`, writing the defaults there on first run.
pub fn load_or_create_settings(path: &Path) -> Result<SpawnerSettings, SettingsIoError> {
    if path.exists() {
        let settings = load_settings(path)?;
        info!("loaded spawner settings from {}", path.display());
        return Ok(settings);
    }

    let settings = SpawnerSettings::default();
    save_settings(path, &settings)?;
    info!("wrote default spawner settings to {}", path.display());
    Ok(settings)
}
