use super::*;

#[test]
fn test_dir_entry_new() {
    let entry = DirEntry::new(PathBuf::from("/test/note.md"), false);
    assert_eq!(entry.name, "note.md");
    assert!(!entry.is_dir);
    assert!(entry.is_file);
}

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/test"));
    assert!(err.to_string().contains("/test"));
}

#[test]
fn test_io_error_maps_kind() {
    let path = Path::new("/missing.md");
    let err = FileError::io(path, io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert!(matches!(err, FileError::NotFound(p) if p == path));

    let err = FileError::io(path, io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
    assert!(matches!(err, FileError::Io { .. }));
    assert!(err.to_string().contains("/missing.md"));
}
