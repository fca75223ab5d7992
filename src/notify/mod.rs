//! Notification fan-out — state changes published to host subscribers.
//!
//! Each message `publish`ed is seen by all current subscribers. Publishing
//! is synchronous and safe from bus callback threads; subscribers read from
//! an unbounded channel. Subscribe before publish or the message is lost.

use serde_json::Value;
use std::sync::Mutex;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::wifi::WifiState;

/// A state-change notification emitted by one of the adapters.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// WiFi public state changed. `is_lnf` is hardcoded false by the
    /// backend (lost-and-found networks are not distinguished).
    WifiStateChanged { state: WifiState, is_lnf: bool },
    /// HDCP status changed; carries the full fixed-shape status object.
    HdcpStatusChanged { status: Value },
}

impl Notification {
    pub fn event_type(&self) -> &'static str {
        match self {
            Notification::WifiStateChanged { .. } => "onWIFIStateChanged",
            Notification::HdcpStatusChanged { .. } => "onDisplayConnectionChanged",
        }
    }

    /// Wire form delivered to event-stream subscribers.
    pub fn to_wire(&self) -> Value {
        let payload = match self {
            Notification::WifiStateChanged { state, is_lnf } => serde_json::json!({
                "state": state.code(),
                "isLNF": is_lnf,
            }),
            Notification::HdcpStatusChanged { status } => status.clone(),
        };
        serde_json::json!({
            "event": self.event_type(),
            "payload": payload,
            "timestamp_ms": chrono::Utc::now().timestamp_millis(),
        })
    }
}

/// Multi-subscriber broadcast channel for adapter notifications.
#[derive(Debug, Default)]
pub struct Notifications {
    // Sender halves are retained here; each subscriber owns the receiver.
    subscribers: Mutex<Vec<UnboundedSender<Notification>>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiver half.
    pub fn subscribe(&self) -> UnboundedReceiver<Notification> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Deliver a notification to every live subscriber, pruning
    /// disconnected ones. Returns the delivered count.
    pub fn publish(&self, notification: Notification) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(notification.clone()).is_ok());
        tracing::debug!(
            event_type = notification.event_type(),
            delivered = subscribers.len(),
            "notification published"
        );
        subscribers.len()
    }
}
