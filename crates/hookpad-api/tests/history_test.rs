//! Integration tests for `GET /webhooks/history`.
//!
//! Drives real sends through the router against a mock endpoint and
//! verifies the read window, ordering, and the concurrent-append
//! behavior of the shared store.

use axum::http::StatusCode;
use hookpad_testing::{response_json, TestEnv};
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn mock_endpoint() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    mock_server
}

async fn send_marked(env: &TestEnv, mock_server: &MockServer, seq: u64) {
    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "customPayload": {"seq": seq}
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_history_returns_empty_array() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env.get("/webhooks/history").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn history_returns_entries_most_recent_first() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = mock_endpoint().await;

    for seq in 1..=3 {
        send_marked(&env, &mock_server, seq).await;
    }

    let body = response_json(env.get("/webhooks/history").await).await;
    let entries = body.as_array().expect("history array");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["payload"]["seq"], 3);
    assert_eq!(entries[1]["payload"]["seq"], 2);
    assert_eq!(entries[2]["payload"]["seq"], 1);
}

#[tokio::test]
async fn history_window_caps_at_ten_entries() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = mock_endpoint().await;

    for seq in 1..=12 {
        send_marked(&env, &mock_server, seq).await;
    }

    let body = response_json(env.get("/webhooks/history").await).await;
    let entries = body.as_array().expect("history array");

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["payload"]["seq"], 12);
    assert_eq!(entries[9]["payload"]["seq"], 3);
}

#[tokio::test]
async fn concurrent_sends_all_reach_history() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = mock_endpoint().await;

    let sends = (1..=8).map(|seq| send_marked(&env, &mock_server, seq));
    futures::future::join_all(sends).await;

    let body = response_json(env.get("/webhooks/history").await).await;
    let entries = body.as_array().expect("history array");

    // The mutex-guarded read-modify-write must not lose any entry.
    assert_eq!(entries.len(), 8);
}

#[tokio::test]
async fn failed_deliveries_appear_in_history() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": "http://hookpad-test.invalid/hook",
                "eventType": "userLogin"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(env.get("/webhooks/history").await).await;
    let entries = body.as_array().expect("history array");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["success"], json!(false));
    assert!(entries[0]["error"].is_string());
}

#[tokio::test]
async fn validation_failures_do_not_appear_in_history() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = mock_endpoint().await;

    send_marked(&env, &mock_server, 1).await;

    let rejected = env.post_json("/webhooks/send", &json!({"url": "not-a-url"})).await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let body = response_json(env.get("/webhooks/history").await).await;
    assert_eq!(body.as_array().expect("history array").len(), 1);
}
