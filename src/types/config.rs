//! Configuration structures.
//!
//! Configuration is loaded from an optional JSON file; every section has
//! sensible defaults so the daemon runs with no file at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Result;

/// Global plugin-daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// IPC transport configuration.
    #[serde(default)]
    pub ipc: IpcConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// IPC server bind address (TCP).
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:50071".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// IPC transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcConfig {
    /// Maximum frame payload size in bytes.
    pub max_frame_bytes: u32,

    /// Bounded channel capacity for streaming responses (event subscribe).
    pub stream_channel_capacity: usize,

    /// Maximum concurrent TCP connections.
    pub max_connections: usize,

    /// Read timeout in seconds per frame. Connections idle beyond this
    /// duration are dropped.
    pub read_timeout_secs: u64,

    /// Write timeout in seconds per frame. Slow consumers that cannot
    /// accept a response within this window are dropped.
    pub write_timeout_secs: u64,
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            max_frame_bytes: 1024 * 1024,
            stream_channel_capacity: 64,
            max_connections: 64,
            read_timeout_secs: 300,
            write_timeout_secs: 10,
        }
    }
}
