//! Single-attempt delivery orchestration.
//!
//! Validates the request, resolves the payload, dispatches exactly one
//! POST, and records the outcome. Validation failures return before any
//! network activity and leave history untouched; every dispatched
//! attempt, completed or not, is appended to history before the result
//! is returned.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use hookpad_core::{
    history::HistoryStore, models::DeliveryResult, templates::template_payload, time::Clock,
    ValidationError,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};
use url::Url;

use crate::client::DeliveryClient;

/// A manual delivery request.
///
/// Field names mirror the wire format of `POST /webhooks/send`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    /// Destination URL. Required.
    pub url: Option<String>,
    /// Identifier of a canned template to deliver.
    pub event_type: Option<String>,
    /// Explicit payload; takes precedence over `event_type`.
    pub custom_payload: Option<Value>,
    /// Extra request headers; override the defaults on collision.
    pub custom_headers: Option<HashMap<String, String>>,
}

/// Dispatches webhook deliveries and records their outcomes.
#[derive(Clone)]
pub struct DeliveryService {
    client: DeliveryClient,
    history: Arc<dyn HistoryStore>,
    clock: Arc<dyn Clock>,
}

impl DeliveryService {
    /// Creates a service delivering with `client` and recording to
    /// `history`.
    pub fn new(
        client: DeliveryClient,
        history: Arc<dyn HistoryStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { client, history, clock }
    }

    /// Performs one delivery attempt.
    ///
    /// A completed exchange yields `success:true` whatever the status
    /// code; transport failures yield `success:false` with the error
    /// message. Both are recorded.
    #[instrument(name = "send_webhook", skip_all)]
    pub async fn send(&self, request: SendRequest) -> Result<DeliveryResult, ValidationError> {
        let url = validate_url(request.url.as_deref())?;
        let payload = resolve_payload(&request)?;

        info!(url = %url, "dispatching webhook");

        let started = self.clock.now();
        let outcome =
            self.client.post_json(&url, &payload, request.custom_headers.as_ref()).await;

        let elapsed = self.clock.now().saturating_duration_since(started);
        let response_time = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let timestamp = DateTime::<Utc>::from(self.clock.now_system());

        let result = match outcome {
            Ok(exchange) => DeliveryResult {
                success: true,
                status: Some(exchange.status),
                status_text: exchange.status_text,
                response_time,
                timestamp,
                url,
                payload,
                response: Some(exchange.body),
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "delivery did not complete");
                DeliveryResult {
                    success: false,
                    status: None,
                    status_text: None,
                    response_time,
                    timestamp,
                    url,
                    payload,
                    response: None,
                    error: Some(e.to_string()),
                }
            },
        };

        if let Err(e) = self.history.append(&result).await {
            warn!(error = %e, "failed to persist delivery history");
        }

        Ok(result)
    }
}

/// Checks the destination is an absolute http/https URL, returning the
/// caller's original string for dispatch and recording.
fn validate_url(raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingUrl),
    };

    let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        _ => Err(ValidationError::UnsupportedScheme),
    }
}

/// Custom payload wins; explicit JSON null counts as absent, so an unknown
/// event type with no custom payload falls through to the missing-payload
/// error.
fn resolve_payload(request: &SendRequest) -> Result<Value, ValidationError> {
    if let Some(payload) = request.custom_payload.as_ref().filter(|p| !p.is_null()) {
        return Ok(payload.clone());
    }

    request
        .event_type
        .as_deref()
        .and_then(template_payload)
        .cloned()
        .ok_or(ValidationError::MissingPayload)
}
