//! Display event bus boundary.
//!
//! Mirrors the platform's display-manager event surface: HDMI hotplug and
//! HDCP authentication status events, plus a synchronous HDCP status query.
//! Event callbacks are invoked from a bus-owned thread.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::types::Result;

/// Vendor-defined HDCP protocol status delivered by the display bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdcpProtocolStatus {
    Unpowered,
    Unauthenticated,
    Authenticated,
    AuthenticationFailure,
    InProgress,
    PortDisabled,
    /// Delivered value the adapter does not recognize. Never mapped.
    Unknown,
}

impl fmt::Display for HdcpProtocolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Event delivered by the display bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// HDMI output hotplug. `connected` is the new cable state.
    HotPlug { connected: bool },
    /// HDCP authentication status change on the output.
    HdcpStatus(HdcpProtocolStatus),
}

/// Callback invoked by the bus on display events.
pub type DisplayEventCallback = Arc<dyn Fn(DisplayEvent) + Send + Sync>;

/// Synchronous client surface of the display event bus.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayBus: Send + Sync {
    /// Query the current HDCP protocol status of the output.
    fn hdcp_status(&self) -> Result<HdcpProtocolStatus>;

    /// Register a display-event callback. The bus may invoke it from its
    /// own thread at any time after registration.
    fn register_display_events(&self, callback: DisplayEventCallback);
}
