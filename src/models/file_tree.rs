//! Lazily populated file tree.
//!
//! Nodes live in a slotmap arena and are addressed by `NodeId`. Directory
//! nodes carry a population state instead of placeholder rows: a directory
//! is either not listed yet, listed and empty, or listed with children.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Dir,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Population {
    /// Children unknown; shown as a placeholder until the next expansion.
    Unexpanded,
    /// Listed and found empty; shown as a placeholder.
    Empty,
    Populated,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileTreeError {
    #[error("invalid node id")]
    InvalidNodeId,
    #[error("node is not a directory")]
    NotADirectory,
}

/// One entry of a directory listing, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: OsString,
    pub kind: NodeKind,
}

impl TreeEntry {
    pub fn new(name: impl Into<OsString>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    name: OsString,
    parent: Option<NodeId>,
    /// Only set on top-level nodes.
    root_path: Option<PathBuf>,
    children: Vec<NodeId>,
    population: Population,
    expanded: bool,
}

impl Node {
    fn new(kind: NodeKind, name: OsString, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            name,
            parent,
            root_path: None,
            children: Vec::new(),
            population: match kind {
                NodeKind::Dir => Population::Unexpanded,
                NodeKind::File => Population::Empty,
            },
            expanded: false,
        }
    }
}

#[derive(Default)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    selected: Option<NodeId>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, path: PathBuf) -> NodeId {
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        let mut node = Node::new(NodeKind::Dir, name, None);
        node.root_path = Some(path);
        let id = self.arena.insert(node);
        self.roots.push(id);
        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn set_root_path(&mut self, id: NodeId, path: PathBuf) -> Result<(), FileTreeError> {
        let node = self.arena.get_mut(id).ok_or(FileTreeError::InvalidNodeId)?;
        if node.parent.is_some() {
            return Err(FileTreeError::InvalidNodeId);
        }
        if let Some(name) = path.file_name() {
            node.name = name.to_os_string();
        }
        node.root_path = Some(path);
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|id| self.arena.contains_key(*id));
    }

    pub fn name(&self, id: NodeId) -> Option<&OsStr> {
        self.arena.get(id).map(|n| n.name.as_os_str())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.arena.get(id).map(|n| n.kind)
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.kind(id) == Some(NodeKind::Dir)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    pub fn population(&self, id: NodeId) -> Option<Population> {
        self.arena.get(id).map(|n| n.population)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|n| n.expanded)
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            if node.kind == NodeKind::Dir {
                node.expanded = expanded;
            }
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn full_path(&self, id: NodeId) -> Option<PathBuf> {
        let mut components = Vec::new();
        let mut current = id;
        loop {
            let node = self.arena.get(current)?;
            match node.parent {
                Some(parent) => {
                    components.push(node.name.as_os_str());
                    current = parent;
                }
                None => {
                    let mut path = node.root_path.clone()?;
                    for comp in components.iter().rev() {
                        path.push(comp);
                    }
                    return Some(path);
                }
            }
        }
    }

    pub fn find_node_by_path(&self, path: &Path) -> Option<NodeId> {
        for &root in &self.roots {
            let Some(root_path) = self.arena.get(root).and_then(|n| n.root_path.as_ref()) else {
                continue;
            };
            let Ok(relative) = path.strip_prefix(root_path) else {
                continue;
            };

            let mut current = root;
            let mut found = true;
            for component in relative.components() {
                let name = component.as_os_str();
                match self
                    .children(current)
                    .iter()
                    .copied()
                    .find(|&child| self.name(child) == Some(name))
                {
                    Some(child) => current = child,
                    None => {
                        found = false;
                        break;
                    }
                }
            }
            if found {
                return Some(current);
            }
        }
        None
    }

    /// Drops all children and records the directory as listed-and-empty.
    pub fn mark_empty(&mut self, id: NodeId) -> Result<bool, FileTreeError> {
        self.reset_children(id, Population::Empty)
    }

    /// Drops all children; they will be listed again on the next expansion.
    pub fn mark_unexpanded(&mut self, id: NodeId) -> Result<bool, FileTreeError> {
        self.reset_children(id, Population::Unexpanded)
    }

    fn reset_children(&mut self, id: NodeId, population: Population) -> Result<bool, FileTreeError> {
        let node = self.arena.get_mut(id).ok_or(FileTreeError::InvalidNodeId)?;
        if node.kind != NodeKind::Dir {
            return Err(FileTreeError::NotADirectory);
        }
        if node.population == population && node.children.is_empty() {
            return Ok(false);
        }
        node.population = population;
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.remove_subtree(child);
        }
        Ok(true)
    }

    /// Installs `entries` as the children of `id`.
    ///
    /// Nothing changes when the directory is already populated with the same
    /// names and kinds. Otherwise existing nodes whose name and kind still
    /// match are reused (keeping their own expansion state), new nodes are
    /// created for new entries and vanished nodes are freed. Returns whether
    /// the structure changed.
    pub fn replace_children(
        &mut self,
        id: NodeId,
        entries: &[TreeEntry],
    ) -> Result<bool, FileTreeError> {
        if entries.is_empty() {
            return self.mark_empty(id);
        }

        let node = self.arena.get(id).ok_or(FileTreeError::InvalidNodeId)?;
        if node.kind != NodeKind::Dir {
            return Err(FileTreeError::NotADirectory);
        }

        let mut existing: FxHashMap<(OsString, NodeKind), NodeId> = FxHashMap::default();
        if node.population == Population::Populated {
            for &child in &node.children {
                if let Some(c) = self.arena.get(child) {
                    existing.insert((c.name.clone(), c.kind), child);
                }
            }
            let unchanged = existing.len() == entries.len()
                && entries
                    .iter()
                    .all(|e| existing.contains_key(&(e.name.clone(), e.kind)));
            if unchanged {
                return Ok(false);
            }
        }

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.name.clone(), entry.kind);
            let child = match existing.remove(&key) {
                Some(reused) => reused,
                None => self
                    .arena
                    .insert(Node::new(entry.kind, entry.name.clone(), Some(id))),
            };
            children.push(child);
        }

        for (_, stale) in existing {
            self.remove_subtree(stale);
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.children = children;
            node.population = Population::Populated;
        }
        Ok(true)
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                stack.extend(node.children);
            }
            if self.selected == Some(current) {
                self.selected = None;
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    File,
    Dir { expanded: bool },
    /// Stands in for the contents of an expanded directory that has none
    /// to show yet.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    /// `None` for placeholder rows.
    pub id: Option<NodeId>,
    pub depth: u16,
    pub name: OsString,
    pub kind: RowKind,
}

pub const PLACEHOLDER_LABEL: &str = "(empty)";

impl FileTree {
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            let kind = match node.kind {
                NodeKind::File => RowKind::File,
                NodeKind::Dir => RowKind::Dir {
                    expanded: node.expanded,
                },
            };
            result.push(FileTreeRow {
                id: Some(id),
                depth,
                name: node.name.clone(),
                kind,
            });

            if node.kind != NodeKind::Dir || !node.expanded {
                continue;
            }
            if node.population != Population::Populated {
                result.push(FileTreeRow {
                    id: None,
                    depth: depth + 1,
                    name: OsString::from(PLACEHOLDER_LABEL),
                    kind: RowKind::Placeholder,
                });
                continue;
            }
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
