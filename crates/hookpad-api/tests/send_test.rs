//! Integration tests for `POST /webhooks/send`.
//!
//! Covers the validation contract (400s that never touch history), the
//! delivery contract (200s for completed and failed attempts alike), and
//! payload resolution precedence, end to end through the router.

use axum::http::StatusCode;
use hookpad_core::event_templates;
use hookpad_testing::{response_json, TestEnv};
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn missing_url_returns_400_and_records_nothing() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env
        .post_json("/webhooks/send", &json!({"eventType": "userLogin"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "URL is required"}));

    assert!(env.history().recent(10).await.is_empty());
}

#[tokio::test]
async fn malformed_url_returns_400_and_records_nothing() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env.post_json("/webhooks/send", &json!({"url": "not-a-url"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "Invalid URL format"}));

    assert!(env.history().recent(10).await.is_empty());
}

#[tokio::test]
async fn non_http_scheme_returns_400() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env
        .post_json("/webhooks/send", &json!({"url": "ftp://example.com/hook"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "URL must use HTTP or HTTPS"}));
}

#[tokio::test]
async fn missing_payload_returns_400() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env
        .post_json("/webhooks/send", &json!({"url": "http://example.com/hook"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "No payload provided"}));

    assert!(env.history().recent(10).await.is_empty());
}

#[tokio::test]
async fn template_delivery_returns_full_result() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/hook"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "eventType": "accountCreated"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!(200));
    assert_eq!(body["statusText"], json!("OK"));
    assert_eq!(body["response"], json!("OK"));
    assert!(body["responseTime"].is_u64());
    assert!(body["timestamp"].is_string());

    let expected =
        serde_json::to_value(&event_templates()["accountCreated"].payload).expect("payload");
    assert_eq!(body["payload"], expected);
    assert_eq!(body["payload"]["eventType"], json!("account.created"));
}

#[tokio::test]
async fn custom_payload_takes_precedence_over_event_type() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let custom = json!({"orderId": "order_789", "total": 12.5});
    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "eventType": "userLogin",
                "customPayload": custom
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["payload"], custom);

    let received = mock_server.received_requests().await.expect("recorded requests");
    assert_eq!(received.len(), 1);
    let delivered: serde_json::Value = received[0].body_json().expect("delivered body");
    assert_eq!(delivered, custom);
}

#[tokio::test]
async fn custom_headers_override_defaults_on_the_wire() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::header("user-agent", "playground-tests/1.0"))
        .and(matchers::header("x-playground-run", "7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "eventType": "userLogin",
                "customHeaders": {
                    "User-Agent": "playground-tests/1.0",
                    "X-Playground-Run": "7"
                }
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!(200));
}

#[tokio::test]
async fn failed_delivery_still_returns_200_and_is_recorded() {
    let env = TestEnv::new().await.expect("test env setup");

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": "http://hookpad-test.invalid/hook",
                "eventType": "userLoginFailure"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
    assert!(body.get("status").is_none());
    assert!(body.get("response").is_none());

    let recorded = env.history().recent(10).await;
    assert_eq!(recorded.len(), 1);
    assert!(!recorded[0].success);
}

#[tokio::test]
async fn completed_4xx_exchange_is_reported_as_success() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "eventType": "userLogin"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["statusText"], json!("Not Found"));
    assert_eq!(body["response"], json!("Not Found"));
}

#[tokio::test]
async fn long_response_body_is_truncated_in_the_result() {
    let env = TestEnv::new().await.expect("test env setup");
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("z".repeat(4096)))
        .mount(&mock_server)
        .await;

    let response = env
        .post_json(
            "/webhooks/send",
            &json!({
                "url": format!("{}/hook", mock_server.uri()),
                "eventType": "userLogin"
            }),
        )
        .await;

    let body = response_json(response).await;
    let captured = body["response"].as_str().expect("response body");
    assert_eq!(captured.chars().count(), 1000);

    // The stored record carries the same truncated body.
    let recorded = env.history().recent(10).await;
    assert_eq!(recorded[0].response.as_deref(), Some(captured));
}
