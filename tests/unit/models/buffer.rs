use super::*;

#[test]
fn test_buffer_id_round_trips_through_text() {
    let id = BufferId::from_raw(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<BufferId>().unwrap(), id);
    assert_eq!(" 7 ".parse::<BufferId>().unwrap().get(), 7);
    assert!("".parse::<BufferId>().is_err());
    assert!("abc".parse::<BufferId>().is_err());
}

#[test]
fn test_normalize_folds_dots() {
    assert_eq!(
        normalize_path(Path::new("/home/u/./notes/../note.md")),
        PathBuf::from("/home/u/note.md")
    );
    assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
}

#[test]
fn test_normalize_relative_uses_cwd() {
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(normalize_path(Path::new("x/y.md")), cwd.join("x/y.md"));
}

#[test]
fn test_seed_text_uses_stem() {
    let buffer = Buffer::new(BufferId::from_raw(1), Path::new("/home/u/Shopping List.md"));
    assert_eq!(buffer.seed_text(), "# Shopping List\n\n");
}
