//! Shared plumbing for the kernel and the app layer.

pub mod context;

pub use context::AppContext;
