//! HDCP status adapter.
//!
//! Translates display-bus hotplug and HDCP authentication events into the
//! host's link status surface. Hotplug re-queries the bus for the current
//! protocol status; a disconnect is recorded as `Unpowered` directly.

use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::bus::display::{DisplayBus, DisplayEvent, HdcpProtocolStatus};
use crate::hdcp::state::{map_hdcp_status, HdcpState};
use crate::notify::{Notification, Notifications};
use crate::types::{Error, Result};

/// Most recent raw status plus the hotplug-tracked connection flag.
#[derive(Debug, Clone, Copy, Default)]
struct HdcpCache {
    status: Option<HdcpProtocolStatus>,
    connected: bool,
}

/// Adapter instance. Collaborators are injected at construction.
pub struct HdcpProfileAdapter {
    bus: Arc<dyn DisplayBus>,
    notifications: Arc<Notifications>,
    cache: Mutex<HdcpCache>,
}

impl HdcpProfileAdapter {
    pub fn new(bus: Arc<dyn DisplayBus>, notifications: Arc<Notifications>) -> Arc<Self> {
        Arc::new(Self {
            bus,
            notifications,
            cache: Mutex::new(HdcpCache::default()),
        })
    }

    /// Register for display events and seed the cache with one explicit
    /// status query. A failed query is logged and left as "state unset".
    pub fn initialize(self: &Arc<Self>) {
        let adapter = Arc::clone(self);
        self.bus
            .register_display_events(Arc::new(move |event| adapter.on_display_event(event)));

        match self.bus.hdcp_status() {
            Ok(status) => {
                let connected = !matches!(status, HdcpProtocolStatus::Unpowered);
                self.apply(status, connected);
            }
            Err(err) => tracing::warn!("failed to get HDCP status: {err}"),
        }
    }

    /// Bus callback for hotplug and authentication status events.
    pub fn on_display_event(&self, event: DisplayEvent) {
        match event {
            DisplayEvent::HotPlug { connected } => {
                let status = if connected {
                    match self.bus.hdcp_status() {
                        Ok(status) => status,
                        Err(err) => {
                            tracing::warn!("HDCP status query on hotplug failed: {err}");
                            return;
                        }
                    }
                } else {
                    HdcpProtocolStatus::Unpowered
                };
                self.apply(status, connected);
            }
            DisplayEvent::HdcpStatus(status) => {
                let connected = self.cache.lock().unwrap().connected;
                self.apply(status, connected);
            }
        }
    }

    fn apply(&self, status: HdcpProtocolStatus, connected: bool) {
        {
            // Lock scope is the assignment only; mapping and notification
            // fan-out happen after release.
            let mut cache = self.cache.lock().unwrap();
            cache.status = Some(status);
            cache.connected = connected;
        }
        match map_hdcp_status(status) {
            Some(state) => {
                self.notifications.publish(Notification::HdcpStatusChanged {
                    status: status_payload(state, status, connected),
                });
            }
            None => tracing::warn!("unknown HDCP protocol status: {status}"),
        }
    }

    /// Last mapped public link state.
    pub fn current_state(&self) -> Result<HdcpState> {
        let cached = self.cache.lock().unwrap().status;
        let raw = cached.ok_or_else(|| Error::state_unset("no HDCP status cached yet"))?;
        map_hdcp_status(raw).ok_or_else(|| Error::unmapped_status(format!("HDCP status {raw}")))
    }

    /// Fixed-shape status object for `getHDCPStatus`.
    pub fn hdcp_status(&self) -> Result<Value> {
        let cache = *self.cache.lock().unwrap();
        let raw = cache
            .status
            .ok_or_else(|| Error::state_unset("no HDCP status cached yet"))?;
        let state = map_hdcp_status(raw)
            .ok_or_else(|| Error::unmapped_status(format!("HDCP status {raw}")))?;
        Ok(status_payload(state, raw, cache.connected))
    }

    /// Static capability report for `getSettopHDCPSupport`.
    pub fn settop_hdcp_support(&self) -> Value {
        serde_json::json!({
            "supportedHDCPVersion": "2.2",
            "isHDCPSupported": true,
        })
    }
}

fn status_payload(state: HdcpState, raw: HdcpProtocolStatus, connected: bool) -> Value {
    serde_json::json!({
        "state": state.code(),
        "isConnected": connected,
        "isHDCPEnabled": raw != HdcpProtocolStatus::PortDisabled,
        "isHDCPCompliant": raw == HdcpProtocolStatus::Authenticated,
    })
}
