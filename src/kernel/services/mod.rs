//! Services layer (ports + adapters).
//!
//! - `ports`: contracts of the collaborators the kernel talks to.
//! - `adapters`: OS specific implementations of those contracts.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
