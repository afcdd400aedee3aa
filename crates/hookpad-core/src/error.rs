//! Error taxonomy for request validation and history persistence.
//!
//! Validation failures surface to the caller as HTTP 400 and are never
//! recorded to history. History failures never surface to the caller at
//! all: writes are logged and swallowed, reads degrade to empty.

use thiserror::Error;

/// Caller input failed a precondition before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No destination URL was supplied.
    #[error("URL is required")]
    MissingUrl,

    /// The destination did not parse as an absolute URL.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// The destination URL uses a scheme other than http or https.
    #[error("URL must use HTTP or HTTPS")]
    UnsupportedScheme,

    /// Neither a custom payload nor a known template was given.
    #[error("No payload provided")]
    MissingPayload,
}

/// History file could not be read or written.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem access failed.
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The history array could not be encoded.
    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_wire_contract() {
        assert_eq!(ValidationError::MissingUrl.to_string(), "URL is required");
        assert_eq!(ValidationError::InvalidUrl.to_string(), "Invalid URL format");
        assert_eq!(ValidationError::UnsupportedScheme.to_string(), "URL must use HTTP or HTTPS");
        assert_eq!(ValidationError::MissingPayload.to_string(), "No payload provided");
    }
}
