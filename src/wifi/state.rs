//! WiFi state translation — vendor interface status → public wifi state.
//!
//! Pure deterministic mapping. The table is total over the statuses the
//! backend is known to deliver; anything else (notably `Unknown`) is a
//! first-class miss the caller must branch on, never a default state.

use serde::{Deserialize, Serialize};

use crate::bus::netconfig::InterfaceStatus;

/// Public wifi state exposed to host clients.
///
/// Integer codes are part of the response schema:
/// 0 DISABLED, 1 DISCONNECTED, 2 CONNECTING, 3 CONNECTED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WifiState {
    Disabled,
    Disconnected,
    Connecting,
    Connected,
}

impl WifiState {
    /// Wire integer for the response schema.
    pub fn code(self) -> i32 {
        match self {
            WifiState::Disabled => 0,
            WifiState::Disconnected => 1,
            WifiState::Connecting => 2,
            WifiState::Connected => 3,
        }
    }
}

/// Map a vendor interface status to the public wifi state.
///
/// Returns `None` for statuses with no table entry.
pub fn map_interface_status(status: InterfaceStatus) -> Option<WifiState> {
    match status {
        InterfaceStatus::Disabled => Some(WifiState::Disabled),
        InterfaceStatus::Disconnected => Some(WifiState::Disconnected),
        InterfaceStatus::Dormant => Some(WifiState::Disconnected),
        InterfaceStatus::Associating => Some(WifiState::Connecting),
        InterfaceStatus::Binding => Some(WifiState::Connecting),
        InterfaceStatus::Scanning => Some(WifiState::Connecting),
        InterfaceStatus::Assigned => Some(WifiState::Connected),
        InterfaceStatus::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_maps() {
        let table = [
            (InterfaceStatus::Disabled, WifiState::Disabled),
            (InterfaceStatus::Disconnected, WifiState::Disconnected),
            (InterfaceStatus::Dormant, WifiState::Disconnected),
            (InterfaceStatus::Associating, WifiState::Connecting),
            (InterfaceStatus::Binding, WifiState::Connecting),
            (InterfaceStatus::Scanning, WifiState::Connecting),
            (InterfaceStatus::Assigned, WifiState::Connected),
        ];
        for (raw, expected) in table {
            assert_eq!(map_interface_status(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn unknown_status_is_a_miss() {
        assert_eq!(map_interface_status(InterfaceStatus::Unknown), None);
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(WifiState::Disabled.code(), 0);
        assert_eq!(WifiState::Disconnected.code(), 1);
        assert_eq!(WifiState::Connecting.code(), 2);
        assert_eq!(WifiState::Connected.code(), 3);
    }
}
