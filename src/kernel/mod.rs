//! Headless editor core: buffers, sidebar tree and content routing.

pub mod buffers;
pub mod router;
pub mod services;
pub mod sidebar;

pub use buffers::{BufferEvent, BufferEvents, BufferRegistry};
pub use router::{edit_uri, ContentRouter, Response};
pub use sidebar::{Sidebar, SidebarEvent};
