//! HDCP service handler — link status and capability queries.

use crate::ipc::router::DispatchResponse;
use crate::plugins::Plugins;
use crate::types::{Error, Result};
use serde_json::Value;

pub async fn handle(plugins: &Plugins, method: &str, _body: Value) -> Result<DispatchResponse> {
    match method {
        "getHDCPStatus" => {
            let response = match plugins.hdcp.hdcp_status() {
                Ok(status) => serde_json::json!({
                    "HDCPStatus": status,
                    "success": true,
                }),
                Err(err) => {
                    tracing::warn!("getHDCPStatus failed: {err}");
                    serde_json::json!({ "success": false })
                }
            };
            Ok(DispatchResponse::Single(response))
        }

        "getSettopHDCPSupport" => {
            let mut response = plugins.hdcp.settop_hdcp_support();
            response["success"] = Value::Bool(true);
            Ok(DispatchResponse::Single(response))
        }

        _ => Err(Error::not_found(format!("Unknown hdcp method: {}", method))),
    }
}
