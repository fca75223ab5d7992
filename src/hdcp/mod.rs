//! HDCP status plugin — link status translation and queries.

mod adapter;
mod state;

pub use adapter::HdcpProfileAdapter;
pub use state::{map_hdcp_status, HdcpState};
