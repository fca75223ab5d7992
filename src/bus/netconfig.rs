//! Network-configuration bus boundary.
//!
//! Mirrors the platform's `networkconfig` service surface: interface
//! enumeration, per-interface key/value params, interface status, and a
//! status-changed subscription. Status callbacks are invoked from a
//! bus-owned thread, concurrently with query handlers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::types::Result;

/// Vendor-defined interface status delivered by the bus. Not owned by the
/// adapters; they only translate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceStatus {
    Disabled,
    Disconnected,
    Associating,
    Dormant,
    Binding,
    Assigned,
    Scanning,
    /// Delivered value the adapter does not recognize. Never mapped.
    Unknown,
}

impl InterfaceStatus {
    /// Parse the bus's string form. Unrecognized values become `Unknown`
    /// rather than an error — the bus owns this vocabulary and may grow it.
    pub fn from_vendor(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "disabled" => Self::Disabled,
            "disconnected" => Self::Disconnected,
            "associating" => Self::Associating,
            "dormant" => Self::Dormant,
            "binding" => Self::Binding,
            "assigned" => Self::Assigned,
            "scanning" => Self::Scanning,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for InterfaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Callback invoked by the bus on interface status changes. Arguments are
/// the interface name and its new status.
pub type StatusChangedCallback = Arc<dyn Fn(&str, InterfaceStatus) + Send + Sync>;

/// Synchronous client surface of the network-configuration bus.
#[cfg_attr(test, mockall::automock)]
pub trait NetworkConfigBus: Send + Sync {
    /// List the names of all known interfaces.
    fn interfaces(&self) -> Result<Vec<String>>;

    /// Read a per-interface parameter (e.g. `type`, `netid`).
    fn param(&self, interface: &str, key: &str) -> Result<String>;

    /// Query the current status of one interface.
    fn status(&self, interface: &str) -> Result<InterfaceStatus>;

    /// Register a status-changed callback. The bus may invoke it from its
    /// own thread at any time after registration.
    fn register_status_changed(&self, callback: StatusChangedCallback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_strings_parse_case_insensitive() {
        assert_eq!(
            InterfaceStatus::from_vendor("ASSIGNED"),
            InterfaceStatus::Assigned
        );
        assert_eq!(
            InterfaceStatus::from_vendor("dormant"),
            InterfaceStatus::Dormant
        );
    }

    #[test]
    fn unrecognized_vendor_string_is_unknown() {
        assert_eq!(
            InterfaceStatus::from_vendor("tethering"),
            InterfaceStatus::Unknown
        );
        assert_eq!(InterfaceStatus::from_vendor(""), InterfaceStatus::Unknown);
    }
}
