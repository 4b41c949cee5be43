use super::*;
use lemscope_protocols::EncodedImage;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn analyzer_for(server: &MockServer) -> GeminiAnalyzer {
    let config = GeminiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    GeminiAnalyzer::new("test-key".to_string(), &config).unwrap()
}

fn slice(index: usize) -> SliceRequest {
    SliceRequest {
        url: "https://example.com".to_string(),
        index,
        role: SliceRole::for_index(index),
        image: EncodedImage::png("iVBORw0KGgo="),
    }
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

#[test]
fn test_analyzer_uses_configured_model() {
    let config = GeminiConfig {
        api_key: Some("configured".to_string()),
        model: "gemini-2.5-pro".to_string(),
        ..Default::default()
    };
    let analyzer = GeminiAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.id(), "gemini");
    assert_eq!(analyzer.model(), "gemini-2.5-pro");
}

#[test]
fn test_text_only_request_enables_search() {
    let config = GeminiConfig::default();
    let analyzer = GeminiAnalyzer::new("k".to_string(), &config).unwrap();
    let json = serde_json::to_value(analyzer.text_only_request("https://example.com")).unwrap();
    assert_eq!(json["tools"], json!([{"googleSearch": {}}]));
    assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
    assert!(json.get("generationConfig").is_none());
}

#[tokio::test]
async fn test_top_slice_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}]}],
            "generationConfig": {"thinkingConfig": {"thinkingBudget": 4096}}
        })))
        .respond_with(text_response("```json\n{\"markers\": []}\n```"))
        .expect(1)
        .mount(&server)
        .await;

    let text = analyzer_for(&server).analyze_slice(slice(0)).await.unwrap();
    assert_eq!(text, "```json\n{\"markers\": []}\n```");
}

#[tokio::test]
async fn test_body_slice_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {"thinkingConfig": {"thinkingBudget": 2048}}
        })))
        .respond_with(text_response("{\"markers\": []}"))
        .expect(1)
        .mount(&server)
        .await;

    let text = analyzer_for(&server).analyze_slice(slice(3)).await.unwrap();
    assert_eq!(text, "{\"markers\": []}");
}

#[tokio::test]
async fn test_text_only_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({"tools": [{"googleSearch": {}}]})))
        .respond_with(text_response("{\"summary\": \"ok\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let text = analyzer_for(&server)
        .analyze_text_only("https://example.com")
        .await
        .unwrap();
    assert_eq!(text, "{\"summary\": \"ok\"}");
}

#[tokio::test]
async fn test_empty_candidates_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = analyzer_for(&server).analyze_slice(slice(1)).await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse(_)));
}

#[tokio::test]
async fn test_blocked_prompt_is_content_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let err = analyzer_for(&server).analyze_slice(slice(0)).await.unwrap_err();
    match err {
        ProviderError::ContentFiltered(message) => assert!(message.contains("SAFETY")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}
        })))
        .mount(&server)
        .await;

    let err = analyzer_for(&server).analyze_slice(slice(2)).await.unwrap_err();
    assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
    assert!(err.is_retryable());
}
