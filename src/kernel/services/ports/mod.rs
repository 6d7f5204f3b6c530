//! Service ports: traits + data contracts.

pub mod config;
pub mod file;
pub mod settings;
pub mod surface;

pub use config::AppConfig;
pub use file::{DirEntry, FileError, FileProvider, Result as FileResult};
pub use settings::{
    MemorySettingsStore, SettingKey, SettingValue, Settings, SettingsStore, WindowGeometry,
};
pub use surface::{RenderSurface, ScriptReply, ScriptRequest, SurfaceEvent};
