//! WiFi status plugin — interface status translation and queries.

mod adapter;
mod state;

pub use adapter::WifiStateAdapter;
pub use state::{map_interface_status, WifiState};
