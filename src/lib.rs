//! hypermd - Markdown editor core
//!
//! Modules:
//! - core: explicit application context (config + filesystem)
//! - kernel: buffer registry, sidebar controller, `app://` content router,
//!   service ports and adapters
//! - models: buffers, rename operations, the lazy file tree
//! - app: the workbench that hosts the kernel and its event loop

pub mod app;
pub mod core;
pub mod error;
pub mod kernel;
pub mod models;

pub use error::{Error, Result};
