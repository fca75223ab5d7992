//! Status plugin daemon - main entry point.
//!
//! Serves the wifi and hdcp plugin services over the framed IPC transport.
//! Without platform buses on the host, the daemon runs over the in-memory
//! simulated buses, which is enough for host-integration testing of the
//! RPC surface.

use clap::Parser;
use std::sync::Arc;

use stb_status_plugins::bus::sim::{SimDisplayBus, SimNetworkConfig};
use stb_status_plugins::ipc::IpcServer;
use stb_status_plugins::plugins::Plugins;
use stb_status_plugins::types::Config;

#[derive(Parser, Debug)]
#[command(name = "stb-statusd", about = "Set-top-box status plugin daemon")]
struct Args {
    /// Path to a JSON config file.
    #[arg(long, env = "STB_STATUS_CONFIG")]
    config: Option<String>,

    /// Override the IPC listen address.
    #[arg(long, env = "STB_STATUS_LISTEN")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen_addr = listen;
    }

    stb_status_plugins::observability::init_tracing(&config.observability);

    let netconfig = Arc::new(
        SimNetworkConfig::new()
            .with_interface("eth0", "ethernet")
            .with_interface("wlan0", "wifi"),
    );
    let display = Arc::new(SimDisplayBus::new());

    let plugins = Arc::new(Plugins::new(netconfig, display));
    plugins.initialize();

    let addr = config.server.listen_addr.parse()?;
    let server = Arc::new(IpcServer::new(plugins, addr, config.ipc.clone()));

    tracing::info!("status plugin daemon starting on {}", addr);
    tracing::info!("  wifi: getCurrentState, getConnectedSSID");
    tracing::info!("  hdcp: getHDCPStatus, getSettopHDCPSupport");
    tracing::info!("  events: Subscribe");

    let server_clone = server.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            server_clone.shutdown();
        }
    });

    server.serve().await?;
    Ok(())
}
