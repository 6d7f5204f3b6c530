use crate::kernel::services::ports::FileError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source of a rename does not exist.
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error(transparent)]
    File(#[from] FileError),
    #[error("no available document name in {} after {attempts} attempts", .dir.display())]
    NoAvailableName { dir: PathBuf, attempts: usize },
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("settings error: {0}")]
    Settings(String),
}
