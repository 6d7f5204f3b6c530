//! Data model layer.

pub mod buffer;
pub mod file_tree;
pub mod rename_op;

pub use buffer::{normalize_path, Buffer, BufferId, BufferRef};
pub use file_tree::{
    FileTree, FileTreeError, FileTreeRow, NodeId, NodeKind, Population, RowKind, TreeEntry,
    PLACEHOLDER_LABEL,
};
pub use rename_op::RenameOp;
