//! Per-user directories.
//!
//! - macOS: ~/Library/Application Support/hypermd, caches in ~/Library/Caches
//! - Linux: $XDG_DATA_HOME/hypermd or ~/.local/share/hypermd, caches in
//!   $XDG_CACHE_HOME or ~/.cache
//! - Windows: %APPDATA%\hypermd, caches in %LOCALAPPDATA%

use std::path::PathBuf;

pub const APP_NAME: &str = "hypermd";
const LOG_DIR: &str = "logs";

pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        match std::env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_NAME)),
            _ => std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME)),
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"))
    }

    #[cfg(target_os = "linux")]
    {
        match std::env::var("XDG_CACHE_HOME") {
            Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg)),
            _ => std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".cache")),
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("LOCALAPPDATA")
            .or_else(|_| std::env::var("APPDATA"))
            .ok()
            .map(PathBuf::from)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Log directory used when the per-user one cannot be created.
pub fn fallback_log_dir() -> PathBuf {
    std::env::temp_dir().join(APP_NAME).join(LOG_DIR)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
