//! Plugin registry — the adapters and their shared notification channel.

use std::sync::Arc;

use crate::bus::display::DisplayBus;
use crate::bus::netconfig::NetworkConfigBus;
use crate::hdcp::HdcpProfileAdapter;
use crate::notify::Notifications;
use crate::wifi::WifiStateAdapter;

/// All loaded plugin adapters, built over injected bus clients.
pub struct Plugins {
    pub wifi: Arc<WifiStateAdapter>,
    pub hdcp: Arc<HdcpProfileAdapter>,
    pub notifications: Arc<Notifications>,
}

impl Plugins {
    pub fn new(netconfig: Arc<dyn NetworkConfigBus>, display: Arc<dyn DisplayBus>) -> Self {
        let notifications = Arc::new(Notifications::new());
        Self {
            wifi: WifiStateAdapter::new(netconfig, notifications.clone()),
            hdcp: HdcpProfileAdapter::new(display, notifications.clone()),
            notifications,
        }
    }

    /// Initialize every adapter (resolve identities, register callbacks,
    /// seed caches). Individual adapter failures are soft.
    pub fn initialize(&self) {
        self.wifi.initialize();
        self.hdcp.initialize();
    }
}
