//! Service adapters: OS specific implementations of the ports.

pub mod file;
pub mod paths;
pub mod settings;
pub mod surface;
pub mod watcher;

pub use file::LocalFileProvider;
pub use paths::{ensure_log_dir, fallback_log_dir, get_app_data_dir, get_cache_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, JsonSettingsStore,
};
pub use surface::HeadlessSurface;
pub use watcher::WorkspaceWatcher;
