use super::*;
use crate::kernel::services::ports::{DirEntry, FileError, FileResult};
use std::path::Path;
use std::sync::Mutex;

/// Provider that only records which paths were probed.
#[derive(Default)]
struct ProbeFiles {
    probed: Mutex<Vec<std::path::PathBuf>>,
}

impl FileProvider for ProbeFiles {
    fn read_dir(&self, path: &Path) -> FileResult<Vec<DirEntry>> {
        Err(FileError::NotADirectory(path.to_path_buf()))
    }

    fn read_file(&self, path: &Path) -> FileResult<String> {
        Err(FileError::NotFound(path.to_path_buf()))
    }

    fn read_file_bytes(&self, path: &Path) -> FileResult<Vec<u8>> {
        Err(FileError::NotFound(path.to_path_buf()))
    }

    fn write_file(&self, _path: &Path, _content: &str) -> FileResult<()> {
        Ok(())
    }

    fn create_file(&self, _path: &Path) -> FileResult<()> {
        Ok(())
    }

    fn rename(&self, _from: &Path, _to: &Path) -> FileResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.probed.lock().unwrap().push(path.to_path_buf());
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

#[test]
fn test_clones_share_config_and_files() {
    let files = Arc::new(ProbeFiles::default());
    let ctx = AppContext::new(
        AppConfig::new("/assets").with_document_extension(".markdown"),
        files.clone(),
    );
    let copy = ctx.clone();

    assert_eq!(copy.config().document_extension, ".markdown");
    assert!(!copy.files().exists(Path::new("/x")));
    assert_eq!(*files.probed.lock().unwrap(), [Path::new("/x")]);
}

#[test]
fn test_local_context_reads_disk() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = AppContext::local(AppConfig::new(dir.path()));
    assert!(ctx.files().is_dir(dir.path()));
    assert_eq!(ctx.config().asset_root, dir.path());
}
