//! # Set-top-box status plugins
//!
//! Host-runtime plugin adapters for a set-top-box middleware platform:
//! - **WiFi**: translates network-configuration bus interface statuses into
//!   a public wifi state and answers state/SSID queries
//! - **HDCP**: translates display-bus hotplug and HDCP authentication
//!   events into a public link state and answers status queries
//!
//! Both follow the same shape: event source → status fetch → table lookup →
//! fixed-shape response → notification fan-out. Bus collaborators are
//! injected behind traits (`bus`), so tests and local runs substitute
//! in-memory implementations (`bus::sim`). The IPC layer (`ipc`) exposes
//! the adapters over the host's framed msgpack transport.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod bus;
pub mod hdcp;
pub mod ipc;
pub mod notify;
pub mod plugins;
pub mod types;
pub mod wifi;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
