//! HTTP server setup and request routing.
//!
//! Requests flow through request-id injection, tracing, timeout
//! enforcement, and permissive CORS (the playground is driven from a
//! browser) before reaching the handlers. The server drains in-flight
//! requests on CTRL+C or SIGTERM.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use hookpad_core::{history::HistoryStore, time::Clock};
use hookpad_delivery::DeliveryService;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use crate::handlers;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Delivery orchestration: validation, dispatch, recording.
    pub delivery: DeliveryService,
    /// Delivery history, for the read path.
    pub history: Arc<dyn HistoryStore>,
    /// Time source for handler timestamps.
    pub clock: Arc<dyn Clock>,
}

/// Creates the axum router with all routes and middleware.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let webhook_routes = Router::new()
        .route("/webhooks/send", post(handlers::webhooks::send_webhook))
        .route("/webhooks/templates", get(handlers::webhooks::list_templates))
        .route("/webhooks/history", get(handlers::webhooks::delivery_history));

    Router::new()
        .route("/health", get(handlers::health::liveness_check))
        .merge(webhook_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Middleware to inject a request ID into all responses.
///
/// Adds an `X-Request-Id` header for correlating request logs.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Starts the HTTP server and serves until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
/// while serving.
pub async fn start_server(
    state: AppState,
    addr: SocketAddr,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    let app = create_router(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
