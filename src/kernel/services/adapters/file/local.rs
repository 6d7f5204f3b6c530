//! Local filesystem provider.

use crate::kernel::services::ports::file::{DirEntry, FileError, FileProvider, Result};
use std::fs;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !path.is_dir() {
            return Err(FileError::NotADirectory(path.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FileError::io(path, e))? {
            let entry = entry.map_err(|e| FileError::io(path, e))?;
            let entry_path = entry.path();
            // Follow symlinks so a linked folder lists as a folder.
            let is_dir = match fs::metadata(&entry_path) {
                Ok(meta) => meta.is_dir(),
                Err(_) => entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry_path,
                is_dir,
                is_file: !is_dir,
            });
        }

        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(|e| FileError::io(path, e))
    }

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::read(path).map_err(|e| FileError::io(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if path.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::write(path, content).map_err(|e| FileError::io(path, e))
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FileError::io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        fs::rename(from, to).map_err(|e| FileError::io(from, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
