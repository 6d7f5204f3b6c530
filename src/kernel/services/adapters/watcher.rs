//! Watches the sidebar roots for structural changes made outside the app.

use crate::kernel::sidebar::is_hidden;
use notify::event::ModifyKind;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

const WATCHER_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct WorkspaceWatcher {
    watcher: RecommendedWatcher,
    raw_event_rx: mpsc::Receiver<notify::Event>,
    roots: Vec<PathBuf>,
}

impl WorkspaceWatcher {
    pub fn new() -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };
                let _ = tx.send(event);
            },
            Config::default().with_poll_interval(WATCHER_POLL_INTERVAL),
        )?;
        Ok(Self {
            watcher,
            raw_event_rx: rx,
            roots: Vec::new(),
        })
    }

    pub fn watch(&mut self, root: &Path) -> Result<(), notify::Error> {
        if self.roots.iter().any(|r| r == root) {
            return Ok(());
        }
        self.watcher.watch(root, RecursiveMode::Recursive)?;
        self.roots.push(root.to_path_buf());
        Ok(())
    }

    /// Re-targets the watcher after the roots moved.
    pub fn sync_roots(&mut self, roots: &[PathBuf]) {
        for stale in self.roots.clone() {
            if !roots.contains(&stale) {
                let _ = self.watcher.unwatch(&stale);
                self.roots.retain(|r| r != &stale);
            }
        }
        for root in roots {
            if let Err(e) = self.watch(root) {
                tracing::warn!(root = %root.display(), error = %e, "cannot watch folder");
            }
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Consumes pending events. Returns whether any of them added, removed
    /// or renamed a visible entry.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.raw_event_rx.try_recv() {
            if !is_structural(&event.kind) {
                continue;
            }
            if event.paths.iter().any(|p| self.is_visible(p)) {
                changed = true;
            }
        }
        changed
    }

    fn is_visible(&self, path: &Path) -> bool {
        let relative = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok());
        match relative {
            Some(relative) => !relative.components().any(|component| match component {
                Component::Normal(name) => is_hidden(&name.to_string_lossy()),
                _ => false,
            }),
            None => !path
                .file_name()
                .is_some_and(|name| is_hidden(&name.to_string_lossy())),
        }
    }
}

fn is_structural(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_))
    )
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/watcher.rs"]
mod tests;
