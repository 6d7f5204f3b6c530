//! Filesystem contract consumed by the kernel.
//!
//! The filesystem is shared and unsynchronized; implementations report
//! what they see at call time and never cache.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => FileError::AlreadyExists(path.to_path_buf()),
            _ => FileError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            is_dir,
            is_file: !is_dir,
        }
    }
}

pub trait FileProvider: Send + Sync {
    /// Entries of `path` in no particular order.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    fn read_file(&self, path: &Path) -> Result<String>;

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Truncates and replaces the file content.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates an empty file, failing with `AlreadyExists` if anything is there.
    fn create_file(&self, path: &Path) -> Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path) && !self.is_dir(path)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
