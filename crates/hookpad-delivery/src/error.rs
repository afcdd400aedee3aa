//! Error types for outbound webhook dispatch.
//!
//! These cover attempts that produced no HTTP response at all. A completed
//! exchange is never an error here, whatever its status code; the service
//! folds these variants into `success:false` delivery results.

use thiserror::Error;

/// Result type alias for delivery operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Transport-level failure of a delivery attempt.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// Connection could not be established or was interrupted.
    #[error("network error: {message}")]
    Network {
        /// Description of the network failure.
        message: String,
    },

    /// The configured delivery timeout elapsed without a response.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The HTTP client could not be built or the request was malformed
    /// before dispatch (for example an invalid caller-supplied header).
    #[error("invalid delivery request: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl DeliveryError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_format() {
        assert_eq!(
            DeliveryError::timeout(10_000).to_string(),
            "request timed out after 10000ms"
        );
        assert_eq!(
            DeliveryError::network("connection refused").to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            DeliveryError::configuration("invalid header name").to_string(),
            "invalid delivery request: invalid header name"
        );
    }
}
