//! Boxoffice Server
//!
//! A headless box office for ticketed events.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use boxoffice_core::events::notice_channel;
use boxoffice_core::office::BoxOffice;
use boxoffice_core::payments::RailOverHttp;
use boxoffice_core::processors::NoticeRelay;
use boxoffice_core::utils::clock::SystemClock;
use clap::Parser;
use config::ConfigLoader;
use server::{build_router, run_server};
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxoffice - headless box office for ticketed events
#[derive(Parser, Debug)]
#[command(name = "boxoffice-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./boxoffice-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting boxoffice-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(&args.config, args.listen);
    let runtime = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = runtime.listen;
    tracing::info!("Configuration loaded from {:?}", args.config);

    // Notice channel and the relay draining it into the log
    let (notice_tx, notice_rx) = notice_channel();
    let (relay_shutdown_tx, relay_shutdown_rx) = watch::channel(false);
    let relay_handle = tokio::spawn(NoticeRelay::new(notice_rx, relay_shutdown_rx).run());

    // The office, wired to the HTTP settlement rail and the wall clock
    let rail = Arc::new(RailOverHttp::new(runtime.rail_endpoint.clone()));
    let office = BoxOffice::new(runtime.office, rail, Arc::new(SystemClock), notice_tx);

    // Create application state
    let state = AppState::new(office, runtime.admin_auth);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Stop the notice relay
    let _ = relay_shutdown_tx.send(true);
    let _ = relay_handle.await;

    tracing::info!("Server shutdown complete");
    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
