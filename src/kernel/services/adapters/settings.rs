//! Settings file in the per-user cache directory.

use super::paths::get_cache_dir;
use crate::kernel::services::ports::settings::{SettingKey, SettingValue, Settings, SettingsStore};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".hypermd";
const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

/// Reads settings from `path`. A missing or malformed file yields `None`.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
            None
        }
    }
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&get_settings_path()?)
}

/// `SettingsStore` that writes the whole file through on every `set`.
pub struct JsonSettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl JsonSettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = load_settings_from(&path).unwrap_or_default();
        Self { path, settings }
    }

    /// The store at the default location, creating the file if needed.
    pub fn open_default() -> Result<Self> {
        let path = ensure_settings_file().map_err(|e| Error::Settings(e.to_string()))?;
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Settings(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| Error::Settings(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| Error::Settings(e.to_string()))
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: SettingKey) -> SettingValue {
        self.settings.get(key)
    }

    fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        if !self.settings.set(key, value) {
            return Err(Error::Settings(format!("{value:?} does not fit {key:?}")));
        }
        self.save()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
