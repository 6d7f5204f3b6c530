use crate::core::AppContext;
use crate::models::{NodeKind, TreeEntry};
use std::path::Path;

/// Names starting with a dot are never shown.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Visible entries of `path`: folders first, then documents, each group in
/// lexicographic order.
///
/// An unreadable or missing directory lists as empty.
pub fn list_directory(ctx: &AppContext, path: &Path) -> Vec<TreeEntry> {
    let entries = match ctx.files().read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "listing failed, showing as empty");
            return Vec::new();
        }
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries {
        if is_hidden(&entry.name) {
            continue;
        }
        let Some(name) = entry.path.file_name().map(|n| n.to_os_string()) else {
            continue;
        };
        if entry.is_dir {
            dirs.push(TreeEntry::new(name, NodeKind::Dir));
        } else if ctx.config().is_document(&entry.path) {
            files.push(TreeEntry::new(name, NodeKind::File));
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    dirs
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/listing.rs"]
mod tests;
