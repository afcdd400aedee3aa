//! Integration-test environment for the webhook playground.
//!
//! Provides a [`TestEnv`] owning a temp-dir-backed history store and the
//! fully wired application state, plus request helpers around the router.
//! Each environment is isolated: nothing touches the real history file or
//! ambient configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::{
    sync::Arc,
    time::{Duration, UNIX_EPOCH},
};

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use hookpad_api::server::{create_router, AppState};
use hookpad_core::{
    history::{FileHistoryStore, HistoryStore},
    time::{Clock, TestClock},
};
use hookpad_delivery::{ClientConfig, DeliveryClient, DeliveryService};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Request timeout used by test routers.
const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Start of test time, as seconds since the epoch.
const TEST_EPOCH_SECS: u64 = 1_700_000_000;

/// Integration-test environment with an isolated history file and a
/// deterministic clock.
pub struct TestEnv {
    /// Deterministic clock injected into the service and handlers.
    pub clock: TestClock,
    history: Arc<dyn HistoryStore>,
    state: AppState,
    _data_dir: TempDir,
}

impl TestEnv {
    /// Creates an environment with the default delivery client
    /// configuration.
    pub async fn new() -> Result<Self> {
        Self::with_client_config(ClientConfig::default()).await
    }

    /// Creates an environment with a custom delivery client
    /// configuration (for example a short timeout).
    pub async fn with_client_config(config: ClientConfig) -> Result<Self> {
        let data_dir = tempfile::tempdir()?;
        let history: Arc<dyn HistoryStore> =
            Arc::new(FileHistoryStore::new(data_dir.path().join("events.json")).await?);

        let clock = TestClock::with_start_time(UNIX_EPOCH + Duration::from_secs(TEST_EPOCH_SECS));
        let shared_clock: Arc<dyn Clock> = Arc::new(clock.clone());

        let client = DeliveryClient::new(config)?;
        let delivery = DeliveryService::new(client, history.clone(), shared_clock.clone());

        let state = AppState { delivery, history: history.clone(), clock: shared_clock };

        Ok(Self { clock, history, state, _data_dir: data_dir })
    }

    /// Router wired to this environment's state.
    pub fn router(&self) -> Router {
        create_router(self.state.clone(), TEST_REQUEST_TIMEOUT)
    }

    /// History store backing this environment.
    pub fn history(&self) -> Arc<dyn HistoryStore> {
        self.history.clone()
    }

    /// Sends a GET request through the router.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("build request");

        self.router().oneshot(request).await.expect("execute request")
    }

    /// Sends a JSON POST request through the router.
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
            .expect("build request");

        self.router().oneshot(request).await.expect("execute request")
    }
}

/// Reads a response body as JSON.
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response json")
}
