//! HDCP state translation — vendor protocol status → public link state.
//!
//! Same shape as the wifi translation: a fixed table, total over the known
//! protocol statuses, with `Unknown` as a first-class miss.

use serde::{Deserialize, Serialize};

use crate::bus::display::HdcpProtocolStatus;

/// Public HDCP link state exposed to host clients.
///
/// Integer codes are part of the response schema:
/// 0 DISABLED, 1 DISCONNECTED, 2 AUTHENTICATING, 3 AUTHENTICATED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdcpState {
    Disabled,
    Disconnected,
    Authenticating,
    Authenticated,
}

impl HdcpState {
    /// Wire integer for the response schema.
    pub fn code(self) -> i32 {
        match self {
            HdcpState::Disabled => 0,
            HdcpState::Disconnected => 1,
            HdcpState::Authenticating => 2,
            HdcpState::Authenticated => 3,
        }
    }
}

/// Map a vendor HDCP protocol status to the public link state.
///
/// Returns `None` for statuses with no table entry.
pub fn map_hdcp_status(status: HdcpProtocolStatus) -> Option<HdcpState> {
    match status {
        HdcpProtocolStatus::PortDisabled => Some(HdcpState::Disabled),
        HdcpProtocolStatus::Unpowered => Some(HdcpState::Disconnected),
        HdcpProtocolStatus::Unauthenticated => Some(HdcpState::Disconnected),
        HdcpProtocolStatus::AuthenticationFailure => Some(HdcpState::Disconnected),
        HdcpProtocolStatus::InProgress => Some(HdcpState::Authenticating),
        HdcpProtocolStatus::Authenticated => Some(HdcpState::Authenticated),
        HdcpProtocolStatus::Unknown => None,
    }
}
