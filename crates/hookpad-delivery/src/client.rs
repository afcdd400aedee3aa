//! HTTP client for webhook dispatch with a bounded timeout.
//!
//! Wraps a pooled reqwest client, categorizes transport failures, and
//! caps the captured response body at the history record limit.

use std::{collections::HashMap, time::Duration};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::error::{DeliveryError, Result};

/// Longest response body captured in a delivery result, in characters.
pub const MAX_RESPONSE_CHARS: usize = 1000;

/// Configuration for the outbound webhook client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hard timeout for the whole HTTP exchange.
    pub timeout: Duration,
    /// User agent sent with every request unless the caller overrides it.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_millis(10_000), user_agent: "Hookpad/1.0".to_string() }
    }
}

/// A completed HTTP exchange, whatever its status code.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    /// Numeric status code.
    pub status: u16,
    /// Canonical reason phrase, when one is defined for the status.
    pub status_text: Option<String>,
    /// Response body, truncated to [`MAX_RESPONSE_CHARS`].
    pub body: String,
}

/// Webhook dispatch client.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl DeliveryClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Configuration` if the underlying HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                DeliveryError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// POSTs `payload` as JSON to `url`.
    ///
    /// Caller headers are applied after the defaults, so they may override
    /// `Content-Type` and `User-Agent`. Any response with a status line is
    /// a completed exchange; only transport failures return an error.
    pub async fn post_json(
        &self,
        url: &str,
        payload: &Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<ExchangeOutcome> {
        let mut request = self.client.post(url).json(payload);

        if let Some(headers) = headers {
            request = request.headers(build_header_map(headers)?);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DeliveryError::network(format!("failed to read response body: {e}"))
        })?;

        debug!(status = status.as_u16(), "exchange completed");

        Ok(ExchangeOutcome {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_owned),
            body: truncate_chars(body, MAX_RESPONSE_CHARS),
        })
    }

    fn classify(&self, error: reqwest::Error) -> DeliveryError {
        if error.is_timeout() {
            let timeout_ms =
                u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            return DeliveryError::timeout(timeout_ms);
        }
        if error.is_connect() {
            return DeliveryError::network(format!("connection failed: {error}"));
        }
        if error.is_builder() {
            return DeliveryError::configuration(error.to_string());
        }
        DeliveryError::network(error.to_string())
    }
}

/// Converts caller headers into a `HeaderMap`, replacing defaults on
/// collision.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| DeliveryError::configuration(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| DeliveryError::configuration(format!("invalid header value for {name}: {e}")))?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Truncates to at most `max` characters, on a character boundary.
fn truncate_chars(body: String, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body,
    }
}
