//! Per-service IPC handlers.

pub mod events;
pub mod hdcp;
pub mod wifi;
