//! Top-level IPC router — routes by service, delegates to handlers.

use crate::ipc::handlers;
use crate::plugins::Plugins;
use crate::types::{Error, IpcConfig, Result};
use serde_json::Value;
use tokio::sync::mpsc;

/// Result from dispatching a request.
#[allow(missing_debug_implementations)]
pub enum DispatchResponse {
    /// Single response value (most endpoints).
    Single(Value),
    /// Streaming response — server writes each value as a `MSG_EVENT`
    /// frame, then `MSG_EVENT_END` when the receiver closes.
    Stream(mpsc::Receiver<Value>),
}

/// Route an IPC request to the appropriate service handler.
pub async fn route_request(
    plugins: &Plugins,
    service: &str,
    method: &str,
    body: Value,
    ipc_config: &IpcConfig,
) -> Result<DispatchResponse> {
    match service {
        "wifi" => handlers::wifi::handle(plugins, method, body).await,
        "hdcp" => handlers::hdcp::handle(plugins, method, body).await,
        "events" => handlers::events::handle(plugins, method, body, ipc_config).await,
        _ => Err(Error::not_found(format!("Unknown service: {}", service))),
    }
}
