//! Canned event templates for simulated webhook payloads.
//!
//! The set is fixed at three templates, initialized once and read-only
//! afterwards. Template timestamps are captured at initialization.

use std::{collections::BTreeMap, sync::LazyLock};

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

/// A predefined named JSON payload representing a simulated event.
#[derive(Debug, Clone, Serialize)]
pub struct EventTemplate {
    /// Human-readable template name.
    pub name: &'static str,
    /// Payload delivered when this template is selected.
    pub payload: Value,
}

static TEMPLATES: LazyLock<BTreeMap<&'static str, EventTemplate>> = LazyLock::new(|| {
    let initialized_at = Utc::now();

    BTreeMap::from([
        (
            "userLogin",
            EventTemplate {
                name: "User Login Success",
                payload: json!({
                    "eventType": "user.login",
                    "userId": "user_123",
                    "email": "user@example.com",
                    "timestamp": initialized_at,
                    "success": true,
                    "ipAddress": "192.168.1.1",
                    "userAgent": "Mozilla/5.0..."
                }),
            },
        ),
        (
            "userLoginFailure",
            EventTemplate {
                name: "User Login Failure",
                payload: json!({
                    "eventType": "user.login.failed",
                    "email": "user@example.com",
                    "reason": "invalid_password",
                    "timestamp": initialized_at,
                    "attemptCount": 3,
                    "ipAddress": "192.168.1.1"
                }),
            },
        ),
        (
            "accountCreated",
            EventTemplate {
                name: "Account Created",
                payload: json!({
                    "eventType": "account.created",
                    "userId": "user_456",
                    "email": "newuser@example.com",
                    "plan": "free",
                    "timestamp": initialized_at,
                    "source": "signup"
                }),
            },
        ),
    ])
});

/// Returns the full template set, keyed by event type identifier.
pub fn event_templates() -> &'static BTreeMap<&'static str, EventTemplate> {
    &TEMPLATES
}

/// Looks up the payload for a template identifier.
pub fn template_payload(event_type: &str) -> Option<&'static Value> {
    TEMPLATES.get(event_type).map(|template| &template.payload)
}
