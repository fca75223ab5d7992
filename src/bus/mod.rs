//! Collaborator boundary — the system buses the adapters consume.
//!
//! The platform delivers interface and display status over two buses (a
//! network-configuration message bus and a display event bus). The adapters
//! only ever touch them through the traits defined here, so tests and local
//! runs can substitute doubles; `sim` provides in-memory implementations.

pub mod display;
pub mod netconfig;
pub mod sim;

pub use display::{DisplayBus, DisplayEvent, DisplayEventCallback, HdcpProtocolStatus};
pub use netconfig::{InterfaceStatus, NetworkConfigBus, StatusChangedCallback};
