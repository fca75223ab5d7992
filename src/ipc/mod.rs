//! TCP+msgpack IPC transport layer.
//!
//! The plugin host's dispatch surface: length-prefixed msgpack frames over
//! TCP, routed by service/method to the plugin handlers.

pub mod codec;
pub mod handlers;
pub mod router;
pub mod server;

pub use server::IpcServer;
