//! WiFi status adapter.
//!
//! Thin translator between the network-configuration bus and the host's
//! wifi status surface: caches the most recent vendor status, maps it to
//! the public state, and re-notifies subscribers on every mapped event.

use std::sync::{Arc, Mutex, OnceLock};

use crate::bus::netconfig::{InterfaceStatus, NetworkConfigBus};
use crate::notify::{Notification, Notifications};
use crate::types::{Error, Result};
use crate::wifi::state::{map_interface_status, WifiState};

/// Adapter instance. Collaborators are injected at construction; all
/// internal state is behind its own lock, so queries and bus callbacks may
/// run concurrently.
pub struct WifiStateAdapter {
    bus: Arc<dyn NetworkConfigBus>,
    notifications: Arc<Notifications>,
    /// Most recent raw status. Written by the seeding query and the bus
    /// callback, read by every query handler.
    status: Mutex<Option<InterfaceStatus>>,
    /// Resolved wifi interface name; the scan runs at most once and its
    /// outcome (including "none found") is cached for the adapter lifetime.
    interface: OnceLock<Option<String>>,
}

impl WifiStateAdapter {
    pub fn new(bus: Arc<dyn NetworkConfigBus>, notifications: Arc<Notifications>) -> Arc<Self> {
        Arc::new(Self {
            bus,
            notifications,
            status: Mutex::new(None),
            interface: OnceLock::new(),
        })
    }

    /// Resolve the interface, register for status updates, and seed the
    /// cache with one explicit query. A missing interface or a failed seed
    /// query is logged and left as "state unset" — not fatal to startup.
    pub fn initialize(self: &Arc<Self>) {
        let Some(interface) = self.interface_name().map(str::to_string) else {
            tracing::warn!("no 'wifi' interface found");
            return;
        };

        let adapter = Arc::clone(self);
        self.bus
            .register_status_changed(Arc::new(move |iface, status| {
                adapter.on_status_changed(iface, status);
            }));

        match self.bus.status(&interface) {
            Ok(status) => self.update_status(status),
            Err(err) => {
                tracing::warn!(interface, "failed to get interface status: {err}");
            }
        }
    }

    /// Bus callback. Events for other interfaces are ignored.
    pub fn on_status_changed(&self, interface: &str, status: InterfaceStatus) {
        if self.interface_name() == Some(interface) {
            self.update_status(status);
        }
    }

    fn update_status(&self, status: InterfaceStatus) {
        {
            // Lock scope is the assignment only; mapping and notification
            // fan-out happen after release.
            let mut cached = self.status.lock().unwrap();
            *cached = Some(status);
        }
        match map_interface_status(status) {
            Some(state) => {
                // isLNF is hardcoded false, matching the default backend.
                self.notifications.publish(Notification::WifiStateChanged {
                    state,
                    is_lnf: false,
                });
            }
            None => tracing::warn!("unknown interface status: {status}"),
        }
    }

    /// Last mapped public state.
    pub fn current_state(&self) -> Result<WifiState> {
        let cached = *self.status.lock().unwrap();
        let raw = cached.ok_or_else(|| Error::state_unset("no wifi status cached yet"))?;
        map_interface_status(raw)
            .ok_or_else(|| Error::unmapped_status(format!("interface status {raw}")))
    }

    /// SSID of the connected network, parsed from the interface's `netid`
    /// param (`<prefix>:<ssid>`).
    pub fn connected_ssid(&self) -> Result<String> {
        let interface = self
            .interface_name()
            .ok_or_else(|| Error::unavailable("no 'wifi' interface found"))?;
        let netid = self.bus.param(interface, "netid")?;
        match netid.split_once(':') {
            Some((_, ssid)) => Ok(ssid.to_string()),
            None => Err(Error::malformed_identity(format!(
                "netid '{netid}' has no ':' separator"
            ))),
        }
    }

    /// Enabling/disabling the radio is not supported by this backend.
    pub fn set_enabled(&self, _enable: bool) -> Result<()> {
        Err(Error::unavailable("setEnabled is not supported"))
    }

    /// Security-mode enumeration is not supported by this backend.
    pub fn supported_security_modes(&self) -> Result<Vec<String>> {
        Err(Error::unavailable("getSupportedSecurityModes is not supported"))
    }

    /// Name of the physical wifi interface, resolved lazily on first use by
    /// scanning for an interface with `type == "wifi"`.
    pub fn interface_name(&self) -> Option<&str> {
        self.interface
            .get_or_init(|| self.fetch_interface_name())
            .as_deref()
    }

    fn fetch_interface_name(&self) -> Option<String> {
        match self.bus.interfaces() {
            Ok(interfaces) => interfaces.into_iter().find(|interface| {
                self.bus
                    .param(interface, "type")
                    .map(|t| t == "wifi")
                    .unwrap_or(false)
            }),
            Err(err) => {
                tracing::warn!("failed to fetch interfaces: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::netconfig::{MockNetworkConfigBus, StatusChangedCallback};
    use crate::bus::sim::SimNetworkConfig;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    fn sim_adapter() -> (Arc<SimNetworkConfig>, Arc<Notifications>, Arc<WifiStateAdapter>) {
        let bus = Arc::new(SimNetworkConfig::new().with_interface("wlan0", "wifi"));
        let notifications = Arc::new(Notifications::new());
        let adapter = WifiStateAdapter::new(bus.clone(), notifications.clone());
        (bus, notifications, adapter)
    }

    #[test]
    fn initialize_seeds_cache_from_bus() {
        let (bus, _notifications, adapter) = sim_adapter();
        bus.set_status("wlan0", InterfaceStatus::Assigned);

        adapter.initialize();

        assert_eq!(adapter.current_state().unwrap(), WifiState::Connected);
    }

    #[test]
    fn initialize_without_wifi_interface_is_soft_failure() {
        let bus = Arc::new(SimNetworkConfig::new().with_interface("eth0", "ethernet"));
        let adapter = WifiStateAdapter::new(bus, Arc::new(Notifications::new()));

        adapter.initialize();

        assert!(matches!(
            adapter.current_state(),
            Err(Error::StateUnset(_))
        ));
        assert!(matches!(
            adapter.connected_ssid(),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn initialize_with_failed_seed_query_leaves_state_unset() {
        let (_bus, _notifications, adapter) = sim_adapter();
        // no status set on wlan0, so the seeding query fails
        adapter.initialize();
        assert!(matches!(adapter.current_state(), Err(Error::StateUnset(_))));
    }

    #[test]
    fn every_mapped_event_is_observable_via_query() {
        let (bus, _notifications, adapter) = sim_adapter();
        adapter.initialize();

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
            bus.emit_status("wlan0", raw);
            assert_eq!(adapter.current_state().unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn mapped_event_notifies_subscribers() {
        let (bus, notifications, adapter) = sim_adapter();
        adapter.initialize();
        let mut rx = notifications.subscribe();

        bus.emit_status("wlan0", InterfaceStatus::Associating);

        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::WifiStateChanged {
                state: WifiState::Connecting,
                is_lnf: false,
            }
        );
    }

    #[test]
    fn unmapped_status_fails_query_and_emits_nothing() {
        let (bus, notifications, adapter) = sim_adapter();
        adapter.initialize();
        let mut rx = notifications.subscribe();

        bus.emit_status("wlan0", InterfaceStatus::Unknown);

        assert!(matches!(
            adapter.current_state(),
            Err(Error::UnmappedStatus(_))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn same_status_twice_notifies_twice() {
        let (bus, notifications, adapter) = sim_adapter();
        adapter.initialize();
        let mut rx = notifications.subscribe();

        bus.emit_status("wlan0", InterfaceStatus::Assigned);
        bus.emit_status("wlan0", InterfaceStatus::Assigned);

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first, second);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn events_for_other_interfaces_are_ignored() {
        let (_bus, _notifications, adapter) = sim_adapter();
        adapter.initialize();

        adapter.on_status_changed("eth0", InterfaceStatus::Assigned);

        assert!(matches!(adapter.current_state(), Err(Error::StateUnset(_))));
    }

    #[test]
    fn ssid_is_suffix_after_first_colon() {
        let (bus, _notifications, adapter) = sim_adapter();
        bus.set_param("wlan0", "netid", "abc:myssid");
        assert_eq!(adapter.connected_ssid().unwrap(), "myssid");

        // only the first colon splits
        bus.set_param("wlan0", "netid", "abc:my:ssid");
        assert_eq!(adapter.connected_ssid().unwrap(), "my:ssid");
    }

    #[test]
    fn netid_without_separator_is_malformed() {
        let (bus, _notifications, adapter) = sim_adapter();
        bus.set_param("wlan0", "netid", "noseparator");
        assert!(matches!(
            adapter.connected_ssid(),
            Err(Error::MalformedIdentity(_))
        ));
    }

    #[test]
    fn netid_query_failure_propagates_as_unavailable() {
        let (_bus, _notifications, adapter) = sim_adapter();
        // no netid param set
        assert!(matches!(
            adapter.connected_ssid(),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn unsupported_operations_fail() {
        let (_bus, _notifications, adapter) = sim_adapter();
        assert!(adapter.set_enabled(true).is_err());
        assert!(adapter.supported_security_modes().is_err());
    }

    #[test]
    fn interface_scan_runs_at_most_once_under_contention() {
        let scans = Arc::new(AtomicUsize::new(0));

        let mut mock = MockNetworkConfigBus::new();
        let scans_clone = scans.clone();
        mock.expect_interfaces().returning(move || {
            scans_clone.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["eth0".to_string(), "wlan0".to_string()])
        });
        mock.expect_param().returning(|interface, key| {
            assert_eq!(key, "type");
            Ok(if interface == "wlan0" { "wifi" } else { "ethernet" }.to_string())
        });

        let adapter = WifiStateAdapter::new(Arc::new(mock), Arc::new(Notifications::new()));

        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let adapter = adapter.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    adapter.interface_name().map(str::to_string)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("wlan0"));
        }
        assert_eq!(scans.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_scan_is_cached_as_none() {
        let mut mock = MockNetworkConfigBus::new();
        mock.expect_interfaces()
            .times(1)
            .returning(|| Err(Error::unavailable("bus down")));

        let adapter = WifiStateAdapter::new(Arc::new(mock), Arc::new(Notifications::new()));
        assert_eq!(adapter.interface_name(), None);
        // second call must not re-scan (times(1) above enforces it)
        assert_eq!(adapter.interface_name(), None);
    }

    #[test]
    fn concurrent_events_and_queries_never_tear() {
        let (bus, _notifications, adapter) = sim_adapter();
        bus.set_status("wlan0", InterfaceStatus::Disconnected);
        adapter.initialize();

        let statuses = [
            InterfaceStatus::Disconnected,
            InterfaceStatus::Scanning,
            InterfaceStatus::Associating,
            InterfaceStatus::Binding,
            InterfaceStatus::Assigned,
        ];

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let bus = bus.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        for status in statuses {
                            bus.emit_status("wlan0", status);
                        }
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let adapter = adapter.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        // every observed state is one of the mapped values,
                        // never anything partial
                        let state = adapter.current_state().unwrap();
                        assert!(matches!(
                            state,
                            WifiState::Disconnected
                                | WifiState::Connecting
                                | WifiState::Connected
                        ));
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
    }

    #[test]
    fn registered_callback_drives_updates() {
        // capture the callback the adapter registers and invoke it manually
        let captured: Arc<Mutex<Option<StatusChangedCallback>>> = Arc::new(Mutex::new(None));

        let mut mock = MockNetworkConfigBus::new();
        mock.expect_interfaces()
            .returning(|| Ok(vec!["wlan0".to_string()]));
        mock.expect_param()
            .returning(|_, _| Ok("wifi".to_string()));
        mock.expect_status()
            .returning(|_| Ok(InterfaceStatus::Disconnected));
        let captured_clone = captured.clone();
        mock.expect_register_status_changed()
            .returning(move |callback| {
                *captured_clone.lock().unwrap() = Some(callback);
            });

        let notifications = Arc::new(Notifications::new());
        let adapter = WifiStateAdapter::new(Arc::new(mock), notifications.clone());
        adapter.initialize();

        let mut rx = notifications.subscribe();
        let callback = captured.lock().unwrap().clone().unwrap();
        callback("wlan0", InterfaceStatus::Assigned);

        assert_eq!(adapter.current_state().unwrap(), WifiState::Connected);
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::WifiStateChanged {
                state: WifiState::Connected,
                is_lnf: false,
            }
        );
    }
}
