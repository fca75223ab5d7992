//! In-memory bus implementations.
//!
//! Back the daemon when no platform buses are present (development, host
//! integration testing) and serve as configurable doubles in tests. Status
//! changes are injected with `emit_*` and fan out to every registered
//! callback on the caller's thread, the way the real buses call back from
//! their delivery thread.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::bus::display::{
    DisplayBus, DisplayEvent, DisplayEventCallback, HdcpProtocolStatus,
};
use crate::bus::netconfig::{InterfaceStatus, NetworkConfigBus, StatusChangedCallback};
use crate::types::{Error, Result};

/// One simulated network interface.
#[derive(Debug, Default)]
struct SimInterface {
    params: HashMap<String, String>,
    status: Option<InterfaceStatus>,
}

/// In-memory network-configuration bus.
#[derive(Default)]
pub struct SimNetworkConfig {
    interfaces: Mutex<Vec<(String, SimInterface)>>,
    callbacks: Mutex<Vec<StatusChangedCallback>>,
}

impl SimNetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface with a `type` param. Returns `self` for chaining.
    pub fn with_interface(self, name: &str, if_type: &str) -> Self {
        {
            let mut interfaces = self.interfaces.lock().unwrap();
            let mut iface = SimInterface::default();
            iface.params.insert("type".to_string(), if_type.to_string());
            interfaces.push((name.to_string(), iface));
        }
        self
    }

    /// Set a param on an existing interface.
    pub fn set_param(&self, name: &str, key: &str, value: &str) {
        let mut interfaces = self.interfaces.lock().unwrap();
        if let Some((_, iface)) = interfaces.iter_mut().find(|(n, _)| n == name) {
            iface.params.insert(key.to_string(), value.to_string());
        }
    }

    /// Set the stored status of an interface without emitting an event.
    pub fn set_status(&self, name: &str, status: InterfaceStatus) {
        let mut interfaces = self.interfaces.lock().unwrap();
        if let Some((_, iface)) = interfaces.iter_mut().find(|(n, _)| n == name) {
            iface.status = Some(status);
        }
    }

    /// Store a new status and deliver it to every registered callback.
    pub fn emit_status(&self, name: &str, status: InterfaceStatus) {
        self.set_status(name, status);
        let callbacks: Vec<StatusChangedCallback> =
            self.callbacks.lock().unwrap().iter().cloned().collect();
        for callback in callbacks {
            callback(name, status);
        }
    }
}

impl NetworkConfigBus for SimNetworkConfig {
    fn interfaces(&self) -> Result<Vec<String>> {
        let interfaces = self.interfaces.lock().unwrap();
        Ok(interfaces.iter().map(|(n, _)| n.clone()).collect())
    }

    fn param(&self, interface: &str, key: &str) -> Result<String> {
        let interfaces = self.interfaces.lock().unwrap();
        interfaces
            .iter()
            .find(|(n, _)| n == interface)
            .and_then(|(_, iface)| iface.params.get(key).cloned())
            .ok_or_else(|| {
                Error::unavailable(format!("no param '{}' on interface '{}'", key, interface))
            })
    }

    fn status(&self, interface: &str) -> Result<InterfaceStatus> {
        let interfaces = self.interfaces.lock().unwrap();
        interfaces
            .iter()
            .find(|(n, _)| n == interface)
            .and_then(|(_, iface)| iface.status)
            .ok_or_else(|| {
                Error::unavailable(format!("no status for interface '{}'", interface))
            })
    }

    fn register_status_changed(&self, callback: StatusChangedCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }
}

/// In-memory display event bus.
#[derive(Default)]
pub struct SimDisplayBus {
    status: Mutex<Option<HdcpProtocolStatus>>,
    callbacks: Mutex<Vec<DisplayEventCallback>>,
}

impl SimDisplayBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queryable HDCP status without emitting an event.
    pub fn set_status(&self, status: HdcpProtocolStatus) {
        *self.status.lock().unwrap() = Some(status);
    }

    /// Deliver an event to every registered callback. `HdcpStatus` events
    /// also update the queryable status.
    pub fn emit(&self, event: DisplayEvent) {
        if let DisplayEvent::HdcpStatus(status) = event {
            self.set_status(status);
        }
        let callbacks: Vec<DisplayEventCallback> =
            self.callbacks.lock().unwrap().iter().cloned().collect();
        for callback in callbacks {
            callback(event);
        }
    }
}

impl DisplayBus for SimDisplayBus {
    fn hdcp_status(&self) -> Result<HdcpProtocolStatus> {
        self.status
            .lock()
            .unwrap()
            .ok_or_else(|| Error::unavailable("display bus has no HDCP status"))
    }

    fn register_display_events(&self, callback: DisplayEventCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn interface_params_and_status_round_trip() {
        let bus = SimNetworkConfig::new().with_interface("wlan0", "wifi");
        bus.set_param("wlan0", "netid", "lan:Home");
        bus.set_status("wlan0", InterfaceStatus::Assigned);

        assert_eq!(bus.interfaces().unwrap(), vec!["wlan0".to_string()]);
        assert_eq!(bus.param("wlan0", "type").unwrap(), "wifi");
        assert_eq!(bus.param("wlan0", "netid").unwrap(), "lan:Home");
        assert_eq!(bus.status("wlan0").unwrap(), InterfaceStatus::Assigned);
    }

    #[test]
    fn missing_interface_is_unavailable() {
        let bus = SimNetworkConfig::new();
        assert!(bus.status("eth0").is_err());
        assert!(bus.param("eth0", "type").is_err());
    }

    #[test]
    fn emit_status_reaches_all_callbacks() {
        let bus = SimNetworkConfig::new().with_interface("wlan0", "wifi");
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = hits.clone();
            bus.register_status_changed(Arc::new(move |interface, status| {
                assert_eq!(interface, "wlan0");
                assert_eq!(status, InterfaceStatus::Scanning);
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }
        bus.emit_status("wlan0", InterfaceStatus::Scanning);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn display_status_query_fails_until_set() {
        let bus = SimDisplayBus::new();
        assert!(bus.hdcp_status().is_err());
        bus.set_status(HdcpProtocolStatus::Authenticated);
        assert_eq!(
            bus.hdcp_status().unwrap(),
            HdcpProtocolStatus::Authenticated
        );
    }

    #[test]
    fn hdcp_status_event_updates_query_side() {
        let bus = SimDisplayBus::new();
        bus.emit(DisplayEvent::HdcpStatus(HdcpProtocolStatus::InProgress));
        assert_eq!(bus.hdcp_status().unwrap(), HdcpProtocolStatus::InProgress);
    }
}
