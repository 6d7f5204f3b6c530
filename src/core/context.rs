//! Explicit application context handed to kernel constructors.

use crate::kernel::services::adapters::LocalFileProvider;
use crate::kernel::services::ports::{AppConfig, FileProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    files: Arc<dyn FileProvider>,
}

impl AppContext {
    pub fn new(config: AppConfig, files: Arc<dyn FileProvider>) -> Self {
        Self {
            config: Arc::new(config),
            files,
        }
    }

    /// Context over the local filesystem.
    pub fn local(config: AppConfig) -> Self {
        Self::new(config, Arc::new(LocalFileProvider::new()))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn files(&self) -> &dyn FileProvider {
        self.files.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/context.rs"]
mod tests;
