use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DOCUMENT_EXTENSION: &str = ".md";
pub const DEFAULT_UNTITLED_STEM: &str = "Untitled";
pub const DEFAULT_MAX_UNTITLED_ATTEMPTS: usize = 100;
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Read-only root served under `app://data/`.
    pub asset_root: PathBuf,
    /// Suffix of editable, visible documents.
    pub document_extension: String,
    pub untitled_stem: String,
    pub max_untitled_attempts: usize,
    /// Coalescing window for window-state persistence.
    pub save_debounce: Duration,
}

impl AppConfig {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            document_extension: DEFAULT_DOCUMENT_EXTENSION.to_string(),
            untitled_stem: DEFAULT_UNTITLED_STEM.to_string(),
            max_untitled_attempts: DEFAULT_MAX_UNTITLED_ATTEMPTS,
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
        }
    }

    pub fn with_document_extension(mut self, extension: impl Into<String>) -> Self {
        self.document_extension = extension.into();
        self
    }

    pub fn with_max_untitled_attempts(mut self, attempts: usize) -> Self {
        self.max_untitled_attempts = attempts;
        self
    }

    pub fn with_save_debounce(mut self, debounce: Duration) -> Self {
        self.save_debounce = debounce;
        self
    }

    /// Whether the file name of `path` ends in the document extension.
    pub fn is_document(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.document_extension))
    }

    /// `Untitled.md`, `Untitled1.md`, `Untitled2.md`, ...
    pub fn untitled_name(&self, attempt: usize) -> String {
        if attempt == 0 {
            format!("{}{}", self.untitled_stem, self.document_extension)
        } else {
            format!(
                "{}{}{}",
                self.untitled_stem, attempt, self.document_extension
            )
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
