use onedrive_vision::{
    config::GeminiConfig,
    gemini::GeminiClient,
    Error,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn test_client(base_url: String) -> GeminiClient {
    GeminiClient::new(
        reqwest::Client::new(),
        GeminiConfig {
            api_key: "gemini-test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            base_url,
        },
    )
}

#[tokio::test]
async fn generate_extracts_first_text_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "gemini-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"answer\":\"a cat\"}"}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let raw = client
        .generate("describe", "image/png", "AQID".to_string())
        .await
        .unwrap();

    assert_eq!(raw, "{\"answer\":\"a cat\"}");
}

#[tokio::test]
async fn generate_sends_inline_image_and_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{
                "parts": [
                    {"text": "what is this?"},
                    {"inline_data": {"mime_type": "image/webp", "data": "AQID"}}
                ]
            }],
            "generationConfig": {
                "temperature": 0.2,
                "response_mime_type": "application/json"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let raw = client
        .generate("what is this?", "image/webp", "AQID".to_string())
        .await
        .unwrap();

    assert_eq!(raw, "ok");
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let err = client
        .generate("q", "image/png", "AQID".to_string())
        .await
        .unwrap_err();

    match err {
        Error::Inference { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exhausted");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_envelope_degrades_to_raw_serialization() {
    let server = MockServer::start().await;

    // No candidates at all, e.g. a safety block.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let raw = client
        .generate("q", "image/png", "AQID".to_string())
        .await
        .unwrap();

    assert!(raw.contains("promptFeedback"));
    assert!(raw.contains("SAFETY"));
}

#[tokio::test]
async fn empty_parts_degrades_to_raw_serialization() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": []}}]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let raw = client
        .generate("q", "image/png", "AQID".to_string())
        .await
        .unwrap();

    assert!(raw.contains("candidates"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 1 should refuse connections.
    let client = test_client("http://127.0.0.1:1".to_string());
    let err = client
        .generate("q", "image/png", "AQID".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InferenceTransport(_)));
}
