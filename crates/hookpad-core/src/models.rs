//! Delivery outcome records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single webhook delivery attempt.
///
/// Created once per attempt and immutable afterwards. `success` reflects
/// whether the HTTP exchange completed, not the status code: a 500
/// response is still a completed delivery, while a timeout or connection
/// failure is not. Optional fields are omitted from the serialized form
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    /// Whether the HTTP exchange completed, regardless of status code.
    pub success: bool,

    /// HTTP status code of a completed exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Canonical reason phrase for the status, when one is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    /// Elapsed time of the attempt in milliseconds.
    pub response_time: u64,

    /// When the attempt finished.
    pub timestamp: DateTime<Utc>,

    /// Destination URL as supplied by the caller.
    pub url: String,

    /// Payload that was sent.
    pub payload: Value,

    /// Response body of a completed exchange, truncated to at most 1000
    /// characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Transport error message for attempts that did not complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
