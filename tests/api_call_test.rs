use reqwest::Method;
use serde_json::json;
use strava_connect::{ApiCallOptions, ApiClient, ApiError, Config};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    ApiClient::from_config(&config).expect("Failed to build API client")
}

#[tokio::test]
async fn test_successful_call_returns_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/friends"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"a": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let data = client.call("/api/friends", None).await.unwrap();

    assert_eq!(data, json!({"a": 1}));
}

#[tokio::test]
async fn test_not_found_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.call("/missing", None).await.unwrap_err();

    assert!(err.to_string().contains("404"), "unexpected error: {}", err);
    assert_eq!(err.to_string(), "API Error: 404 Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.call("/broken", None).await.unwrap_err();

    assert!(matches!(err, ApiError::JsonError(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_http_error() {
    let client = ApiClient::new("http://127.0.0.1:1", false).unwrap();
    let err = client.call("/anything", None).await.unwrap_err();

    assert!(matches!(err, ApiError::HttpError(_)));
}

#[tokio::test]
async fn test_post_with_body_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/friends/invite"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer token123"))
        .and(body_string(r#"{"athlete_id":42}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"invited": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = ApiCallOptions::new()
        .method(Method::POST)
        .bearer_auth("token123")
        .json(&json!({"athlete_id": 42}))
        .unwrap();
    let data = client.call("/api/friends/invite", Some(options)).await.unwrap();

    assert_eq!(data["invited"], json!(true));
}

#[tokio::test]
async fn test_explicit_headers_replace_default_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .and(header("accept", "application/json"))
        .respond_with(|req: &wiremock::Request| {
            if req.headers.contains_key("content-type") {
                ResponseTemplate::new(400)
            } else {
                ResponseTemplate::new(200).set_body_json(json!([]))
            }
        })
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = ApiCallOptions {
        headers: Some(vec![("Accept".to_string(), "application/json".to_string())]),
        ..Default::default()
    };
    let data = client.call("/plain", Some(options)).await.unwrap();

    assert_eq!(data, json!([]));
}

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Status {
    total_athletes: u32,
}

#[tokio::test]
async fn test_typed_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"total_athletes": 3, "authenticated_athletes": []})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let status: Status = client.call_as("/auth/status", None).await.unwrap();

    assert_eq!(status, Status { total_athletes: 3 });
}
