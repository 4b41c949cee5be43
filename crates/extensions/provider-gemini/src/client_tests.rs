use super::*;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig {
        base_url: format!("{}/", server.uri()),
        ..Default::default()
    };
    GeminiClient::new("test-key".to_string(), &config).unwrap()
}

fn request() -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text("Hello")])],
        generation_config: Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig {
                thinking_budget: 2048,
            }),
            ..Default::default()
        }),
        tools: None,
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let config = GeminiConfig {
        base_url: "https://example.test/v1beta/".to_string(),
        ..Default::default()
    };
    let client = GeminiClient::new("k".to_string(), &config).unwrap();
    assert_eq!(client.base_url(), "https://example.test/v1beta");
}

#[tokio::test]
async fn test_generate_content_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"thinkingConfig": {"thinkingBudget": 2048}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"markers\": []}"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap();

    assert_eq!(response.text().as_deref(), Some("{\"markers\": []}"));
}

#[tokio::test]
async fn test_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_key_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap_err();

    match err {
        ProviderError::AuthenticationFailed(message) => assert_eq!(message, "API key not valid"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap_err();

    match err {
        ProviderError::ApiError { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout_seconds: 2,
        ..Default::default()
    };
    let client = GeminiClient::new("k".to_string(), &config).unwrap();

    let err = client
        .generate_content("gemini-2.5-flash", &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Network(_) | ProviderError::Timeout(_)));
}
