//! Core types for the status plugins.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the daemon and IPC transport

mod config;
mod errors;

pub use config::{Config, IpcConfig, ObservabilityConfig, ServerConfig};
pub use errors::{Error, Result};
