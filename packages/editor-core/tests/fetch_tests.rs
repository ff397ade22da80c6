//! Integration tests for fetching the backend config.

use editor_core::config::{fetch_backend_config, HostEnvironment};
use editor_core::Error;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_config(body: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(body)
        .expect(1)
        .mount(&mock_server)
        .await;

    mock_server
}

fn host_port(uri: &str) -> &str {
    uri.strip_prefix("http://").expect("mock server uses http")
}

#[tokio::test]
async fn test_empty_config_uses_origin_defaults() {
    let mock_server =
        serve_config(ResponseTemplate::new(200).set_body_json(serde_json::json!({}))).await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let config = fetch_backend_config(&reqwest::Client::new(), &env)
        .await
        .expect("Fetch failed");

    assert_eq!(config.api_base, format!("{}/api/v1", mock_server.uri()));
    assert_eq!(
        config.web_socket_url,
        format!("ws://{}/xtext-service", host_port(&mock_server.uri()))
    );
}

#[tokio::test]
async fn test_present_field_is_kept() {
    let mock_server = serve_config(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "apiBase": "https://x.test/api"
        })),
    )
    .await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let config = fetch_backend_config(&reqwest::Client::new(), &env)
        .await
        .expect("Fetch failed");

    assert_eq!(config.api_base, "https://x.test/api");
    assert_eq!(
        config.web_socket_url,
        format!("ws://{}/xtext-service", host_port(&mock_server.uri()))
    );
}

#[tokio::test]
async fn test_full_config() {
    let mock_server = serve_config(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "apiBase": "https://refinery.services/api/v1",
            "webSocketURL": "wss://refinery.services/xtext-service",
            "extra": 1
        })),
    )
    .await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let config = fetch_backend_config(&reqwest::Client::new(), &env)
        .await
        .expect("Fetch failed");

    assert_eq!(config.api_base, "https://refinery.services/api/v1");
    assert_eq!(config.web_socket_url, "wss://refinery.services/xtext-service");
}

#[tokio::test]
async fn test_base_url_prefixes_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/refinery/config.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let env = HostEnvironment::new(mock_server.uri(), "/refinery/");
    let config = fetch_backend_config(&reqwest::Client::new(), &env)
        .await
        .expect("Fetch failed");

    assert_eq!(config.api_base, format!("{}/api/v1", mock_server.uri()));
}

#[tokio::test]
async fn test_malformed_json_is_rejected_on_await() {
    let mock_server =
        serve_config(ResponseTemplate::new(200).set_body_string("{ not json")).await;
    let env = HostEnvironment::new(mock_server.uri(), "/");
    let client = reqwest::Client::new();

    // Creating the future does not run anything yet.
    let pending = fetch_backend_config(&client, &env);
    let result = pending.await;

    assert!(matches!(result, Err(Error::Json(_))), "{result:?}");
}

#[tokio::test]
async fn test_wrong_type_is_a_schema_error() {
    let mock_server = serve_config(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "apiBase": 42 })),
    )
    .await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let result = fetch_backend_config(&reqwest::Client::new(), &env).await;

    match result {
        Err(Error::Schema(err)) => assert!(err.has_issue_at("apiBase")),
        other => panic!("Expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_is_not_inspected() {
    let mock_server =
        serve_config(ResponseTemplate::new(503).set_body_json(serde_json::json!({}))).await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let config = fetch_backend_config(&reqwest::Client::new(), &env)
        .await
        .expect("Fetch failed");

    assert_eq!(config.api_base, format!("{}/api/v1", mock_server.uri()));
}

#[tokio::test]
async fn test_missing_document_fails_to_parse() {
    // No mock mounted: the server answers 404 with an empty body.
    let mock_server = MockServer::start().await;
    let env = HostEnvironment::new(mock_server.uri(), "/");

    let result = fetch_backend_config(&reqwest::Client::new(), &env).await;

    assert!(matches!(result, Err(Error::Json(_))), "{result:?}");
}

#[tokio::test]
async fn test_every_call_fetches_again() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let env = HostEnvironment::new(mock_server.uri(), "/");
    let client = reqwest::Client::new();
    let first = fetch_backend_config(&client, &env).await.expect("Fetch failed");
    let second = fetch_backend_config(&client, &env).await.expect("Fetch failed");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_failure() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let origin = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let env = HostEnvironment::new(origin, "/");
    let result = fetch_backend_config(&reqwest::Client::new(), &env).await;

    assert!(matches!(result, Err(Error::Http(_))), "{result:?}");
}
