//! WiFi service handler — state and SSID queries.
//!
//! Adapter failures are converted here into well-formed `success: false`
//! responses; only unknown methods surface as transport errors.

use crate::ipc::router::DispatchResponse;
use crate::plugins::Plugins;
use crate::types::{Error, Result};
use serde_json::Value;

pub async fn handle(plugins: &Plugins, method: &str, body: Value) -> Result<DispatchResponse> {
    match method {
        "getCurrentState" => {
            let response = match plugins.wifi.current_state() {
                Ok(state) => serde_json::json!({
                    "state": state.code(),
                    "success": true,
                }),
                Err(err) => {
                    tracing::warn!("getCurrentState failed: {err}");
                    serde_json::json!({ "success": false })
                }
            };
            Ok(DispatchResponse::Single(response))
        }

        "getConnectedSSID" => {
            let (ssid, success) = match plugins.wifi.connected_ssid() {
                Ok(ssid) => (ssid, true),
                Err(err) => {
                    tracing::warn!("getConnectedSSID failed: {err}");
                    (String::new(), false)
                }
            };
            // Fixed-shape response: unused fields are empty placeholders,
            // present even when the lookup failed.
            Ok(DispatchResponse::Single(serde_json::json!({
                "ssid": ssid,
                "bssid": "",
                "rate": "",
                "noise": "",
                "security": "",
                "signalStrength": "",
                "frequency": "",
                "success": success,
            })))
        }

        "setEnabled" => {
            let enable = body.get("enable").and_then(|v| v.as_bool()).unwrap_or(false);
            if let Err(err) = plugins.wifi.set_enabled(enable) {
                tracing::warn!("setEnabled failed: {err}");
            }
            Ok(DispatchResponse::Single(
                serde_json::json!({ "success": false }),
            ))
        }

        "getSupportedSecurityModes" => {
            let response = match plugins.wifi.supported_security_modes() {
                Ok(modes) => serde_json::json!({
                    "security_modes": modes,
                    "success": true,
                }),
                Err(err) => {
                    tracing::warn!("getSupportedSecurityModes failed: {err}");
                    serde_json::json!({ "success": false })
                }
            };
            Ok(DispatchResponse::Single(response))
        }

        _ => Err(Error::not_found(format!("Unknown wifi method: {}", method))),
    }
}
