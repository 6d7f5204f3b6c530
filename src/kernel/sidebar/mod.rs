//! Sidebar controller: keeps the lazy file tree in step with the disk.
//!
//! The sidebar never edits its own tree in response to a rename it starts.
//! It forwards the rename to the buffer registry and redraws when the
//! registry's rename notification comes back.

pub mod listing;

use crate::core::AppContext;
use crate::kernel::buffers::{BufferEvent, BufferEvents, BufferRegistry};
use crate::models::{normalize_path, FileTree, FileTreeRow, NodeId, Population, RenameOp};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

pub use listing::{is_hidden, list_directory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    FileSelected(PathBuf),
}

pub struct Sidebar {
    ctx: AppContext,
    tree: FileTree,
    buffer_events: BufferEvents,
}

impl Sidebar {
    pub fn new(ctx: AppContext, buffer_events: BufferEvents) -> Self {
        Self {
            ctx,
            tree: FileTree::new(),
            buffer_events,
        }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn rows(&self) -> Vec<FileTreeRow> {
        self.tree.flatten_for_view()
    }

    pub fn root_paths(&self) -> Vec<PathBuf> {
        self.tree
            .roots()
            .iter()
            .filter_map(|&id| self.tree.full_path(id))
            .collect()
    }

    /// Adds a top-level folder, expanded.
    pub fn add_root(&mut self, path: &Path) -> NodeId {
        let id = self.tree.add_root(normalize_path(path));
        self.tree.set_expanded(id, true);
        self.refresh_node(id);
        id
    }

    pub fn node_for_path(&self, path: &Path) -> Option<NodeId> {
        self.tree.find_node_by_path(&normalize_path(path))
    }

    /// Re-validates every top-level folder against the disk.
    pub fn refresh(&mut self) -> bool {
        let roots = self.tree.roots().to_vec();
        let mut changed = false;
        for root in roots {
            changed |= self.refresh_node(root);
        }
        changed
    }

    /// Brings one folder (and, if expanded, its subfolders) in line with the
    /// disk. Returns whether the tree changed.
    pub fn refresh_node(&mut self, id: NodeId) -> bool {
        if !self.tree.is_dir(id) {
            return false;
        }
        let Some(path) = self.tree.full_path(id) else {
            return false;
        };
        let entries = list_directory(&self.ctx, &path);

        if !self.tree.is_expanded(id) {
            let result = if entries.is_empty() {
                self.tree.mark_empty(id)
            } else if self.tree.population(id) == Some(Population::Unexpanded) {
                Ok(false)
            } else {
                self.tree.mark_unexpanded(id)
            };
            return result.unwrap_or(false);
        }

        let mut changed = self.tree.replace_children(id, &entries).unwrap_or(false);
        let subdirs: Vec<NodeId> = self
            .tree
            .children(id)
            .iter()
            .copied()
            .filter(|&child| self.tree.is_dir(child))
            .collect();
        for child in subdirs {
            changed |= self.refresh_node(child);
        }
        changed
    }

    pub fn expand(&mut self, id: NodeId) -> bool {
        if !self.tree.is_dir(id) {
            return false;
        }
        self.tree.set_expanded(id, true);
        self.refresh_node(id);
        true
    }

    /// Collapsing frees the children of a non-empty folder; they are listed
    /// again on the next expansion.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        if !self.tree.is_dir(id) {
            return false;
        }
        self.tree.set_expanded(id, false);
        self.refresh_node(id);
        true
    }

    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.tree.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    /// Selects a node. Files are reported for editing; folders toggle.
    pub fn activate(&mut self, id: NodeId) -> Option<SidebarEvent> {
        if !self.tree.contains(id) {
            return None;
        }
        self.tree.set_selected(Some(id));
        if self.tree.is_dir(id) {
            self.toggle(id);
            return None;
        }
        self.tree.full_path(id).map(SidebarEvent::FileSelected)
    }

    /// In-place rename of a node's display name.
    ///
    /// The tree itself is updated later, when the registry's rename
    /// notification is processed. The name is used as given; blank names are
    /// rejected. Returns `None` when there is nothing to do.
    pub fn rename_node(
        &mut self,
        id: NodeId,
        new_name: &str,
        buffers: &mut BufferRegistry,
    ) -> Result<Option<RenameOp>> {
        let Some(old_path) = self.tree.full_path(id) else {
            return Ok(None);
        };
        let name = new_name;
        if name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains(std::path::MAIN_SEPARATOR)
        {
            return Err(Error::InvalidName(new_name.to_string()));
        }
        let Some(parent) = old_path.parent() else {
            return Ok(None);
        };

        let op = RenameOp::new(&old_path, parent.join(name));
        if op.is_noop() {
            return Ok(None);
        }
        buffers.rename(&op)?;
        Ok(Some(op))
    }

    /// Applies a rename reported by the registry.
    pub fn on_rename(&mut self, op: &RenameOp) {
        for root in self.tree.roots().to_vec() {
            let Some(path) = self.tree.full_path(root) else {
                continue;
            };
            if op.affects(&path) {
                let _ = self.tree.set_root_path(root, op.apply(&path));
            }
        }
        self.refresh();
    }

    /// Handles pending registry notifications. Returns whether any arrived.
    pub fn poll_buffer_events(&mut self) -> bool {
        let events = self.buffer_events.drain();
        let any = !events.is_empty();
        for event in events {
            match event {
                BufferEvent::Renamed(op) => self.on_rename(&op),
            }
        }
        any
    }

    /// Creates the first free `Untitled*.md` in `dir` and shows it.
    pub fn create_document(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = next_untitled_path(&self.ctx, &normalize_path(dir))?;
        self.ctx.files().create_file(&path)?;
        tracing::info!(path = %path.display(), "document created");
        self.refresh();
        Ok(path)
    }
}

/// First name of the form `Untitled.md`, `Untitled1.md`, ... that does not
/// exist in `dir`.
pub fn next_untitled_path(ctx: &AppContext, dir: &Path) -> Result<PathBuf> {
    let config = ctx.config();
    for attempt in 0..config.max_untitled_attempts {
        let candidate = dir.join(config.untitled_name(attempt));
        if !ctx.files().exists(&candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::NoAvailableName {
        dir: dir.to_path_buf(),
        attempts: config.max_untitled_attempts,
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/mod.rs"]
mod tests;
