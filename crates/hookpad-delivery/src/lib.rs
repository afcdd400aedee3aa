//! Outbound webhook dispatch.
//!
//! One attempt per call: the client POSTs a JSON payload with a bounded
//! timeout, and the service validates input, resolves canned templates,
//! and records every dispatched outcome in the shared history store.
//! There are no retries; a timeout or connection failure is itself the
//! recorded outcome.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod service;

pub use client::{ClientConfig, DeliveryClient, ExchangeOutcome, MAX_RESPONSE_CHARS};
pub use error::{DeliveryError, Result};
pub use service::{DeliveryService, SendRequest};
