use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tunematch_gateway::{Credentials, Gateway, HttpMethod};
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Venue {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct LikeRequest<'a> {
    target_user_id: &'a str,
}

fn gateway_for(server: &MockServer, credentials: Credentials) -> Gateway {
    Gateway::new(Url::parse(&server.uri()).unwrap(), credentials)
}

#[tokio::test]
async fn test_envelope_payload_is_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/venues"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": "v1", "name": "Paradiso" }],
            "timestamp": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Credentials::in_memory());
    let response = gateway.get::<Vec<Venue>>("/api/v1/venues").await;

    assert!(response.success);
    assert!(response.error.is_none());
    assert_eq!(
        response.data,
        Some(vec![Venue {
            id: "v1".to_string(),
            name: "Paradiso".to_string()
        }])
    );
}

#[tokio::test]
async fn test_bearer_token_and_body_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/matching/likes"))
        .and(header("Authorization", "Bearer stored-token"))
        .and(body_json(json!({ "target_user_id": "42" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "v9", "name": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::in_memory();
    credentials.set_tokens("stored-token", None).unwrap();

    let gateway = gateway_for(&server, credentials);
    let response = gateway
        .post::<Venue, _>("/api/v1/matching/likes", &LikeRequest { target_user_id: "42" })
        .await;

    assert!(response.success);
    assert_eq!(response.data.unwrap().id, "v9");
}

#[tokio::test]
async fn test_timeout_resolves_with_timeout_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let gateway =
        gateway_for(&server, Credentials::in_memory()).with_timeout(Duration::from_millis(200));
    let response = gateway.get::<Vec<Venue>>("/api/v1/slow").await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error_code(), Some("TIMEOUT"));
}

#[tokio::test]
async fn test_status_without_structured_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/events/1/register"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Credentials::in_memory());
    let response = gateway
        .delete::<serde_json::Value>("/api/v1/events/1/register")
        .await;

    assert_eq!(response.error_code(), Some("HTTP_503"));
}

#[tokio::test]
async fn test_backend_error_code_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" },
            "timestamp": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Credentials::in_memory());
    let response = gateway
        .request::<serde_json::Value, _>(
            HttpMethod::POST,
            "/api/v1/auth/login",
            Some(&json!({ "email": "a@b.c", "password": "nope" })),
        )
        .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, "INVALID_CREDENTIALS");
    assert_eq!(error.message, "Invalid email or password");
}

#[tokio::test]
async fn test_payload_shape_mismatch_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/venues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": "not a list"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Credentials::in_memory());
    let response = gateway.get::<Vec<Venue>>("/api/v1/venues").await;

    assert_eq!(response.error_code(), Some("INVALID_RESPONSE"));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let gateway = Gateway::new(
        Url::parse("http://127.0.0.1:1").unwrap(),
        Credentials::in_memory(),
    )
    .with_timeout(Duration::from_secs(5));

    let response = gateway.get::<Vec<Venue>>("/api/v1/venues").await;

    assert_eq!(response.error_code(), Some("NETWORK_ERROR"));
}
