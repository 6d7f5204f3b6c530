//! Registry of open editing sessions.
//!
//! The registry is the single owner of `Buffer`s and the only source of
//! truth for the path -> buffer mapping. Apart from document creation in the
//! sidebar, `rename` and `on_change` are the only calls in the kernel that
//! mutate the disk.

use crate::core::AppContext;
use crate::models::{normalize_path, Buffer, BufferId, BufferRef, RenameOp};
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEvent {
    Renamed(RenameOp),
}

/// Receiving end of a registry subscription.
pub struct BufferEvents {
    rx: Receiver<BufferEvent>,
}

impl BufferEvents {
    pub fn try_recv(&self) -> Option<BufferEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// All pending events in delivery order.
    pub fn drain(&self) -> Vec<BufferEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

pub struct BufferRegistry {
    ctx: AppContext,
    by_id: FxHashMap<BufferId, Buffer>,
    by_path: FxHashMap<PathBuf, BufferId>,
    last_id: u64,
    observers: Vec<Sender<BufferEvent>>,
}

impl BufferRegistry {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            by_id: FxHashMap::default(),
            by_path: FxHashMap::default(),
            last_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> BufferEvents {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        BufferEvents { rx }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Buffers ordered by identifier.
    pub fn buffers(&self) -> Vec<&Buffer> {
        let mut buffers: Vec<_> = self.by_id.values().collect();
        buffers.sort_by_key(|b| b.id());
        buffers
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&Buffer> {
        let path = normalize_path(path);
        self.by_path.get(&path).and_then(|id| self.by_id.get(id))
    }

    /// Returns the buffer for `path`, registering a new one on first access.
    pub fn find_or_create(&mut self, path: &Path) -> &Buffer {
        let path = normalize_path(path);
        let id = match self.by_path.get(&path) {
            Some(&id) => id,
            None => {
                self.last_id += 1;
                let id = BufferId::from_raw(self.last_id);
                tracing::debug!(%id, path = %path.display(), "buffer opened");
                self.by_id.insert(id, Buffer::new(id, &path));
                self.by_path.insert(path, id);
                id
            }
        };
        &self.by_id[&id]
    }

    pub fn find_by_id(&self, id: BufferId) -> Option<&Buffer> {
        self.by_id.get(&id)
    }

    /// Identifier first, then path.
    pub fn resolve(&self, target: &BufferRef) -> Option<&Buffer> {
        target
            .id
            .and_then(|id| self.find_by_id(id))
            .or_else(|| target.path.as_deref().and_then(|p| self.find_by_path(p)))
    }

    /// Moves a file or folder on disk, then re-points every buffer inside
    /// the moved subtree and notifies subscribers.
    pub fn rename(&mut self, op: &RenameOp) -> Result<()> {
        if op.is_noop() {
            return Ok(());
        }
        let files = self.ctx.files();
        if !files.exists(op.old_path()) {
            return Err(Error::PathNotFound(op.old_path().to_path_buf()));
        }

        files.rename(op.old_path(), op.new_path())?;
        tracing::info!(%op, "renamed");

        self.reindex(op);

        self.observers
            .retain(|tx| tx.send(BufferEvent::Renamed(op.clone())).is_ok());
        Ok(())
    }

    fn reindex(&mut self, op: &RenameOp) {
        let mut moved = Vec::new();
        for buffer in self.by_id.values_mut() {
            if op.affects(buffer.path()) {
                buffer.set_path(op.apply(buffer.path()));
                moved.push(buffer.id());
            }
        }

        // Moved buffers are indexed last so they win over a stale buffer
        // that still points at the destination.
        self.by_path.clear();
        for buffer in self.by_id.values() {
            if !moved.contains(&buffer.id()) {
                self.by_path.insert(buffer.path().to_path_buf(), buffer.id());
            }
        }
        for id in moved {
            let path = self.by_id[&id].path().to_path_buf();
            if let Some(previous) = self.by_path.insert(path, id) {
                tracing::debug!(%previous, %id, "rename displaced a stale buffer");
            }
        }
    }

    /// Persists `text` into the buffer named by `target`.
    ///
    /// Returns whether the file was written. Unknown buffers, blank text and
    /// non-document paths are ignored.
    pub fn on_change(&self, target: &BufferRef, text: &str) -> Result<bool> {
        let Some(buffer) = self.resolve(target) else {
            tracing::debug!(?target, "change for unknown buffer ignored");
            return Ok(false);
        };
        if text.trim().is_empty() {
            tracing::debug!(id = %buffer.id(), "blank change ignored");
            return Ok(false);
        }
        if !self.ctx.config().is_document(buffer.path()) {
            tracing::debug!(path = %buffer.path().display(), "change for non-document ignored");
            return Ok(false);
        }

        self.ctx.files().write_file(buffer.path(), text)?;
        tracing::info!(id = %buffer.id(), path = %buffer.path().display(), bytes = text.len(), "saved");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/buffers.rs"]
mod tests;
