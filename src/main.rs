//! Hookpad webhook playground service.
//!
//! Entry point: initializes tracing, loads configuration, wires the
//! delivery pipeline to the file-backed history store, and serves the
//! HTTP API until shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use hookpad_api::{start_server, AppState, Config};
use hookpad_core::{
    history::{FileHistoryStore, HistoryStore},
    time::{Clock, RealClock},
};
use hookpad_delivery::{DeliveryClient, DeliveryService};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting Hookpad webhook playground");

    let config = Config::load()?;
    info!(
        host = %config.host,
        port = config.port,
        history_file = %config.history_file,
        delivery_timeout_ms = config.delivery_timeout_ms,
        "Configuration loaded"
    );

    let history: Arc<dyn HistoryStore> = Arc::new(
        FileHistoryStore::new(&config.history_file)
            .await
            .context("failed to open history store")?,
    );
    let clock: Arc<dyn Clock> = Arc::new(RealClock::new());

    let client = DeliveryClient::new(config.to_client_config())
        .context("failed to build delivery client")?;
    let delivery = DeliveryService::new(client, history.clone(), clock.clone());

    let state = AppState { delivery, history, clock };

    let addr = config.parse_server_addr()?;
    info!(addr = %addr, "Hookpad is ready to send webhooks");

    start_server(state, addr, Duration::from_secs(config.request_timeout)).await
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,hookpad=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
