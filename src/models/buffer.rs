use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Identifier of an editing session. Minted once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BufferId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(BufferId)
    }
}

/// One file under active editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    id: BufferId,
    path: PathBuf,
}

impl Buffer {
    pub(crate) fn new(id: BufferId, path: &Path) -> Self {
        Self {
            id,
            path: normalize_path(path),
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    /// `# <stem>` seed used when the file does not exist yet.
    pub fn seed_text(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("# {stem}\n\n")
    }
}

/// How a caller names a buffer: by identifier when it has one, by path
/// otherwise. Identifier wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRef {
    pub id: Option<BufferId>,
    pub path: Option<PathBuf>,
}

impl BufferRef {
    pub fn by_id(id: BufferId) -> Self {
        Self {
            id: Some(id),
            path: None,
        }
    }

    pub fn by_path(path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            path: Some(path.into()),
        }
    }
}

impl From<BufferId> for BufferRef {
    fn from(id: BufferId) -> Self {
        Self::by_id(id)
    }
}

/// Absolute form of `path` with `.` and `..` folded lexically.
///
/// Relative paths are resolved against the current directory. Symlinks are
/// left alone.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/models/buffer.rs"]
mod tests;
