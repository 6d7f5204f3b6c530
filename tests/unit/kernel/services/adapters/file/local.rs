use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_read_write_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("note.md");

    let provider = LocalFileProvider::new();

    provider.write_file(&file_path, "# Hello").unwrap();
    assert!(provider.exists(&file_path));
    assert!(provider.is_file(&file_path));

    let content = provider.read_file(&file_path).unwrap();
    assert_eq!(content, "# Hello");
}

#[test]
fn test_write_truncates() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("note.md");

    let provider = LocalFileProvider::new();
    provider.write_file(&file_path, "a much longer first version").unwrap();
    provider.write_file(&file_path, "short").unwrap();

    assert_eq!(provider.read_file(&file_path).unwrap(), "short");
}

#[test]
fn test_write_does_not_create_parents() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let provider = LocalFileProvider::new();
    assert!(matches!(
        provider.write_file(&missing.join("note.md"), "text"),
        Err(FileError::NotFound(_))
    ));
    assert!(!missing.exists());
}

#[test]
fn test_read_dir() {
    let dir = tempdir().unwrap();

    fs::create_dir(dir.path().join("subdir")).unwrap();
    File::create(dir.path().join("file1.md")).unwrap();
    File::create(dir.path().join("file2.txt")).unwrap();

    let provider = LocalFileProvider::new();
    let mut entries = provider.read_dir(dir.path()).unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].name, "subdir");
    assert!(entries[2].is_dir);
    assert!(entries[0].is_file);
}

#[test]
fn test_read_dir_on_file_fails() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("note.md");
    File::create(&file_path).unwrap();

    let provider = LocalFileProvider::new();
    assert!(matches!(
        provider.read_dir(&file_path),
        Err(FileError::NotADirectory(_))
    ));
}

#[test]
fn test_create_file_is_exclusive() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Untitled.md");

    let provider = LocalFileProvider::new();
    provider.create_file(&file_path).unwrap();
    assert!(provider.is_file(&file_path));

    let again = provider.create_file(&file_path);
    assert!(matches!(again, Err(FileError::AlreadyExists(_))));
}

#[test]
fn test_rename() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("old.md");
    let new_path = dir.path().join("new.md");

    let provider = LocalFileProvider::new();

    provider.write_file(&old_path, "content").unwrap();
    provider.rename(&old_path, &new_path).unwrap();

    assert!(!provider.exists(&old_path));
    assert!(provider.exists(&new_path));
}

#[test]
fn test_rename_refuses_to_clobber() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.md");
    let b = dir.path().join("b.md");

    let provider = LocalFileProvider::new();
    provider.write_file(&a, "a").unwrap();
    provider.write_file(&b, "b").unwrap();

    assert!(matches!(
        provider.rename(&a, &b),
        Err(FileError::AlreadyExists(_))
    ));
    assert_eq!(provider.read_file(&b).unwrap(), "b");
}

#[test]
fn test_not_found_error() {
    let provider = LocalFileProvider::new();
    let result = provider.read_file(Path::new("/nonexistent/file.md"));
    assert!(matches!(result, Err(FileError::NotFound(_))));
}
