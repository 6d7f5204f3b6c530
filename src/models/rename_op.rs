use super::buffer::normalize_path;
use std::fmt;
use std::path::{Path, PathBuf};

/// A move of one path (file or folder) to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenameOp {
    old_path: PathBuf,
    new_path: PathBuf,
}

impl RenameOp {
    pub fn new(old_path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> Self {
        Self {
            old_path: normalize_path(old_path.as_ref()),
            new_path: normalize_path(new_path.as_ref()),
        }
    }

    pub fn old_path(&self) -> &Path {
        &self.old_path
    }

    pub fn new_path(&self) -> &Path {
        &self.new_path
    }

    pub fn is_noop(&self) -> bool {
        self.old_path == self.new_path
    }

    /// Whether `path` is the renamed path or lies inside it.
    pub fn affects(&self, path: &Path) -> bool {
        path.starts_with(&self.old_path)
    }

    /// Where `path` lives after the move. Paths outside the moved subtree are
    /// returned unchanged.
    pub fn apply(&self, path: &Path) -> PathBuf {
        if path == self.old_path {
            return self.new_path.clone();
        }
        match path.strip_prefix(&self.old_path) {
            Ok(rest) => self.new_path.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

impl fmt::Display for RenameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.old_path.display(),
            self.new_path.display()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/rename_op.rs"]
mod tests;
