//! Handlers for the webhook playground endpoints.
//!
//! The send endpoint answers 200 for every validated attempt, including
//! attempts whose outbound call failed; only validation failures produce
//! a 400. History reads never fail: an unreadable store is an empty one.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hookpad_core::templates::{event_templates, EventTemplate};
use hookpad_delivery::SendRequest;
use serde::Serialize;
use tracing::instrument;

use crate::server::AppState;

/// Number of entries returned by the history endpoint.
const HISTORY_WINDOW: usize = 10;

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the validation failure.
    pub error: String,
}

/// `POST /webhooks/send`: performs one delivery attempt.
#[instrument(name = "send_webhook", skip_all)]
pub async fn send_webhook(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Response {
    match state.delivery.send(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e.to_string() }))
                .into_response()
        },
    }
}

/// `GET /webhooks/templates`: the full canned template set.
pub async fn list_templates() -> Json<&'static BTreeMap<&'static str, EventTemplate>> {
    Json(event_templates())
}

/// `GET /webhooks/history`: up to the ten most recent delivery results,
/// most recent first.
#[instrument(name = "delivery_history", skip_all)]
pub async fn delivery_history(State(state): State<AppState>) -> Response {
    let entries = state.history.recent(HISTORY_WINDOW).await;
    (StatusCode::OK, Json(entries)).into_response()
}
