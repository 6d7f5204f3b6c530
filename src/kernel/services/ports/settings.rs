use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SIDEBAR_WIDTH: i32 = 250;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowGeometry,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,
}

fn default_sidebar_width() -> i32 {
    DEFAULT_SIDEBAR_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowGeometry::default(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            roots: Vec::new(),
            asset_root: None,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::WindowGeometry => SettingValue::WindowGeometry(self.window),
            SettingKey::SidebarWidth => SettingValue::Int(self.sidebar_width),
        }
    }

    /// Returns false when the value does not fit the key.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> bool {
        match (key, value) {
            (SettingKey::WindowGeometry, SettingValue::WindowGeometry(geometry)) => {
                self.window = geometry;
                true
            }
            (SettingKey::SidebarWidth, SettingValue::Int(width)) => {
                self.sidebar_width = width;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            x: 0,
            y: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    WindowGeometry,
    SidebarWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    WindowGeometry(WindowGeometry),
    Int(i32),
}

/// Key-value access to the small set of persisted UI values.
pub trait SettingsStore {
    fn get(&self, key: SettingKey) -> SettingValue;

    fn set(&mut self, key: SettingKey, value: SettingValue) -> crate::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    settings: Settings,
    writes: usize,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            writes: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: SettingKey) -> SettingValue {
        self.settings.get(key)
    }

    fn set(&mut self, key: SettingKey, value: SettingValue) -> crate::Result<()> {
        if !self.settings.set(key, value) {
            return Err(crate::Error::Settings(format!(
                "{value:?} does not fit {key:?}"
            )));
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
