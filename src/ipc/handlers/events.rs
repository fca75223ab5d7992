//! Events service handler — streaming notification subscription.

use crate::ipc::router::DispatchResponse;
use crate::plugins::Plugins;
use crate::types::{Error, IpcConfig, Result};
use serde_json::Value;
use tokio::sync::mpsc;

pub async fn handle(
    plugins: &Plugins,
    method: &str,
    _body: Value,
    ipc_config: &IpcConfig,
) -> Result<DispatchResponse> {
    match method {
        "Subscribe" => {
            let mut notification_rx = plugins.notifications.subscribe();

            // Bridge UnboundedReceiver<Notification> → bounded mpsc::Receiver<Value>
            let (tx, rx) = mpsc::channel(ipc_config.stream_channel_capacity);
            tokio::spawn(async move {
                while let Some(notification) = notification_rx.recv().await {
                    if tx.send(notification.to_wire()).await.is_err() {
                        break; // Consumer disconnected
                    }
                }
            });

            Ok(DispatchResponse::Stream(rx))
        }

        _ => Err(Error::not_found(format!(
            "Unknown events method: {}",
            method
        ))),
    }
}
