//! Gemini oracle against a mock endpoint

use repo_pulse::Error;
use repo_pulse::adapters::GeminiOracle;
use repo_pulse::config::OracleConfig;
use repo_pulse::core::ports::NarrativeOracle;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oracle(server: &MockServer) -> GeminiOracle {
    let config = OracleConfig {
        api_url: server.uri(),
        model: "gemini-test".to_string(),
        ..OracleConfig::default()
    };
    GeminiOracle::new(&config, "key-123").unwrap()
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "key-123"))
        .and(body_partial_json(json!({"contents": [{"parts": [{"text": "digest"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "[TREND]\nt\n"}, {"text": "[COMMENT]\nc"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = oracle(&server).generate("digest").await.unwrap();
    assert_eq!(answer, "[TREND]\nt\n[COMMENT]\nc");
}

#[tokio::test]
async fn test_empty_answer_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = oracle(&server).generate("digest").await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_quota_error_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .mount(&server)
        .await;

    let err = oracle(&server).generate("digest").await.unwrap_err();
    assert!(matches!(err, Error::Upstream { status: 429, .. }));
}
