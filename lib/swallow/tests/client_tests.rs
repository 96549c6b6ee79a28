//! Integration tests for `ApiClient` using wiremock.

use std::time::Duration;

use serde::Deserialize;
use swallow::{ApiClient, ApiEnvelope, ApiResponse, TransportConfig, UNKNOWN};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

/// Payload with fields beyond the bare contract, embedded the flatten way.
#[derive(Debug, Default, Deserialize)]
struct PingResponse {
    #[serde(flatten)]
    envelope: ApiEnvelope,
    #[serde(default)]
    region: Option<String>,
}

impl ApiResponse for PingResponse {
    fn code(&self) -> i32 {
        self.envelope.code
    }

    fn err_code(&self) -> Option<&str> {
        self.envelope.err_code.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.envelope.message.as_deref()
    }

    fn from_failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            envelope: ApiEnvelope::from_failure(code, message),
            ..Self::default()
        }
    }
}

#[tokio::test]
async fn test_get_decodes_success_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "pong"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let pong: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(pong.code, 200);
    assert_eq!(pong.message.as_deref(), Some("pong"));
    assert_eq!(pong.err_code, None);
}

#[tokio::test]
async fn test_get_reports_failure_status_in_contract() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let reply: ApiEnvelope = client.get(&format!("{}/missing", mock_server.uri())).await;

    assert_eq!(reply.code, 404);
    assert_eq!(reply.message.as_deref(), Some("Not Found"));
    assert_eq!(reply.err_code, None);
}

#[tokio::test]
async fn test_post_sends_json_and_decodes_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"name": "Kira"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "errCode": null,
            "message": "created"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let reply: ApiEnvelope = client
        .post(
            &format!("{}/players", mock_server.uri()),
            &serde_json::json!({"name": "Kira"}),
        )
        .await;

    assert_eq!(reply.code, 200);
    assert_eq!(reply.message.as_deref(), Some("created"));
}

#[tokio::test]
async fn test_post_failure_carries_server_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let reply: ApiEnvelope = client
        .post(
            &format!("{}/players", mock_server.uri()),
            &serde_json::json!({"name": "Kira"}),
        )
        .await;

    assert_eq!(reply.code, 500);
    assert_eq!(reply.message.as_deref(), Some("Internal Server Error"));
}

#[tokio::test]
async fn test_undecodable_body_maps_to_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let reply: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(reply.code, UNKNOWN);
    assert!(reply.message.is_some());
}

#[tokio::test]
async fn test_connection_refused_maps_to_unknown() {
    // Port 1 is never listening.
    let client = ApiClient::new();
    let reply: ApiEnvelope = client.get("http://127.0.0.1:1/ping").await;

    assert_eq!(reply.code, UNKNOWN);
    assert!(reply.message.is_some());
}

#[tokio::test]
async fn test_malformed_url_maps_to_unknown() {
    let client = ApiClient::new();
    let reply: ApiEnvelope = client.get("not a url").await;

    assert_eq!(reply.code, UNKNOWN);
    let message = reply.message.expect("failure description");
    assert!(message.contains("invalid URL"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_timeout_maps_to_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_config(
        TransportConfig::builder()
            .timeout(Duration::from_millis(100))
            .build(),
    );
    let reply: ApiEnvelope = client.get(&format!("{}/slow", mock_server.uri())).await;

    assert_eq!(reply.code, UNKNOWN);
    let message = reply.message.expect("failure description");
    assert!(message.contains("timeout"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_configured_headers_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("X-Api-Key", "secret"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 200})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new().set_header("X-Api-Key", "secret");
    let reply: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(reply.code, 200);
}

#[tokio::test]
async fn test_explicit_content_type_is_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Content-Type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 200})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new().set_header("Content-Type", "text/plain");
    let reply: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(reply.code, 200);
}

#[tokio::test]
async fn test_first_header_write_wins_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("X-Tag", "alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 200})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new()
        .set_header("X-Tag", "alpha")
        .set_header("X-Tag", "beta");
    let reply: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(reply.code, 200);
}

#[tokio::test]
async fn test_repeated_calls_reuse_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 200})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    for _ in 0..3 {
        let reply: ApiEnvelope = client.get(&format!("{}/ping", mock_server.uri())).await;
        assert_eq!(reply.code, 200);
    }
}

#[tokio::test]
async fn test_flattened_payload_decodes_contract_and_extras() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "pong",
            "region": "eu-west"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let pong: PingResponse = client.get(&format!("{}/ping", mock_server.uri())).await;

    assert_eq!(pong.code(), 200);
    assert_eq!(pong.message(), Some("pong"));
    assert_eq!(pong.region.as_deref(), Some("eu-west"));
}

#[tokio::test]
async fn test_flattened_payload_failure_keeps_extras_at_default() {
    let client = ApiClient::new();
    let pong: PingResponse = client.get("http://127.0.0.1:1/ping").await;

    assert_eq!(pong.code(), UNKNOWN);
    assert!(pong.message().is_some());
    assert_eq!(pong.region, None);
}

#[tokio::test]
async fn test_server_error_code_in_body_passes_through() {
    // A 200 whose body reports a business failure is still outcome three:
    // the decoded fields pass through untouched.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 400,
            "errCode": "name_taken",
            "message": "try another name"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let reply: ApiEnvelope = client
        .post(
            &format!("{}/players", mock_server.uri()),
            &serde_json::json!({"name": "Kira"}),
        )
        .await;

    assert_eq!(reply.code, 400);
    assert_eq!(reply.err_code.as_deref(), Some("name_taken"));
    assert_eq!(reply.message.as_deref(), Some("try another name"));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 200})))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new();
    let url = format!("{}/ping", mock_server.uri());

    let (a, b, c, d) = tokio::join!(
        client.get::<ApiEnvelope>(&url),
        client.get::<ApiEnvelope>(&url),
        client.get::<ApiEnvelope>(&url),
        client.get::<ApiEnvelope>(&url),
    );

    for reply in [a, b, c, d] {
        assert_eq!(reply.code, 200);
    }
}
