use super::*;
use notify::event::{CreateKind, DataChange, RemoveKind, RenameMode};

fn watcher_with_raw_channel(root: &Path) -> (WorkspaceWatcher, mpsc::Sender<notify::Event>) {
    let (tx, rx) = mpsc::channel();
    let watcher = RecommendedWatcher::new(
        |_: Result<notify::Event, notify::Error>| {},
        Config::default().with_poll_interval(WATCHER_POLL_INTERVAL),
    )
    .unwrap();
    (
        WorkspaceWatcher {
            watcher,
            raw_event_rx: rx,
            roots: vec![root.to_path_buf()],
        },
        tx,
    )
}

fn event(kind: EventKind, path: &str) -> notify::Event {
    notify::Event::new(kind).add_path(PathBuf::from(path))
}

#[test]
fn test_structural_changes_are_reported_once() {
    let (mut watcher, tx) = watcher_with_raw_channel(Path::new("/notes"));
    tx.send(event(EventKind::Create(CreateKind::File), "/notes/a.md"))
        .unwrap();
    tx.send(event(EventKind::Remove(RemoveKind::Folder), "/notes/old"))
        .unwrap();

    assert!(watcher.drain());
    assert!(!watcher.drain());
}

#[test]
fn test_renames_are_structural() {
    let (mut watcher, tx) = watcher_with_raw_channel(Path::new("/notes"));
    tx.send(event(
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
        "/notes/a.md",
    ))
    .unwrap();
    assert!(watcher.drain());
}

#[test]
fn test_content_writes_are_ignored() {
    let (mut watcher, tx) = watcher_with_raw_channel(Path::new("/notes"));
    tx.send(event(
        EventKind::Modify(ModifyKind::Data(DataChange::Content)),
        "/notes/a.md",
    ))
    .unwrap();
    assert!(!watcher.drain());
}

#[test]
fn test_hidden_entries_are_ignored() {
    let (mut watcher, tx) = watcher_with_raw_channel(Path::new("/home/u/.notes"));
    tx.send(event(
        EventKind::Create(CreateKind::File),
        "/home/u/.notes/.git/index.lock",
    ))
    .unwrap();
    tx.send(event(EventKind::Create(CreateKind::File), "/elsewhere/.swp"))
        .unwrap();
    assert!(!watcher.drain());

    tx.send(event(EventKind::Create(CreateKind::File), "/home/u/.notes/a.md"))
        .unwrap();
    assert!(watcher.drain());
}
