use super::*;

#[test]
fn test_apply_exact_match() {
    let op = RenameOp::new("/root/folder", "/root/folder2");
    assert_eq!(op.apply(Path::new("/root/folder")), PathBuf::from("/root/folder2"));
}

#[test]
fn test_apply_descendant() {
    let op = RenameOp::new("/root/folder", "/elsewhere/renamed");
    assert_eq!(
        op.apply(Path::new("/root/folder/sub/a.md")),
        PathBuf::from("/elsewhere/renamed/sub/a.md")
    );
}

#[test]
fn test_apply_outside_subtree_is_identity() {
    let op = RenameOp::new("/root/folder", "/root/folder2");
    for path in [
        "/root/other.md",
        "/root/folder2/a.md",
        "/root/folderish/a.md",
        "/root",
        "/",
    ] {
        assert_eq!(op.apply(Path::new(path)), PathBuf::from(path), "{path}");
    }
}

#[test]
fn test_affects() {
    let op = RenameOp::new("/root/folder", "/root/folder2");
    assert!(op.affects(Path::new("/root/folder")));
    assert!(op.affects(Path::new("/root/folder/a.md")));
    assert!(!op.affects(Path::new("/root/folder-a.md")));
}

#[test]
fn test_paths_are_normalized() {
    let op = RenameOp::new("/root/./folder/../folder", "/root/x/../folder2");
    assert_eq!(op.old_path(), Path::new("/root/folder"));
    assert_eq!(op.new_path(), Path::new("/root/folder2"));
    assert!(!op.is_noop());
    assert!(RenameOp::new("/a/b", "/a/./b").is_noop());
}

#[test]
fn test_display() {
    let op = RenameOp::new("/a.md", "/b.md");
    assert_eq!(op.to_string(), "/a.md -> /b.md");
}
