//! Core domain types for the webhook playground.
//!
//! Provides the delivery outcome record, the canned event templates, the
//! bounded history store, and the error and time primitives shared by the
//! delivery and API crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod history;
pub mod models;
pub mod templates;
pub mod time;

pub use error::{HistoryError, ValidationError};
pub use history::{FileHistoryStore, HistoryStore, MAX_HISTORY};
pub use models::DeliveryResult;
pub use templates::{event_templates, template_payload, EventTemplate};
pub use time::{Clock, RealClock, TestClock};
