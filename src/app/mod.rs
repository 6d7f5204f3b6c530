//! Application layer: the workbench that hosts the kernel.

pub mod workbench;

pub use workbench::{WindowState, WindowStateSaver, Workbench};
