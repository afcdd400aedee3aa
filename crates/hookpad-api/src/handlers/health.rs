//! Liveness endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, instrument};

use crate::server::AppState;

/// Minimal liveness probe: confirms the HTTP server is responding
/// without touching the history file or the network.
#[instrument(name = "liveness_check", skip_all)]
pub async fn liveness_check(State(state): State<AppState>) -> Response {
    debug!("Performing liveness check");

    let response = serde_json::json!({
        "status": "alive",
        "timestamp": chrono::DateTime::<chrono::Utc>::from(state.clock.now_system()),
        "service": "hookpad",
    });

    (StatusCode::OK, Json(response)).into_response()
}
