use std::sync::Arc;

use async_trait::async_trait;
use explainer::{GeminiProvider, Provider, ProviderError};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common;

#[tokio::test]
async fn e2e_rejected_credential_still_answers_200() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .expect(1)
        .mount(&gemini)
        .await;
    let provider = GeminiProvider::new(Some("bogus".to_string()), format!("{}/generate", gemini.uri()));
    let server = common::spawn_server(Arc::new(provider)).await;

    let (status, json) = common::post_explain(&server, "Hello world").await;
    assert_eq!(status, 200);
    let text = json["simpleExplanation"].as_str().unwrap();
    assert!(text.contains("AI error:"), "got {}", text);
    assert!(text.contains("Gemini HTTP error: 400 API key not valid"), "got {}", text);
    assert_eq!(json["bulletSummary"], serde_json::json!([]));
}

#[tokio::test]
async fn e2e_missing_credential_still_answers_200() {
    let provider = GeminiProvider::new(None, "http://127.0.0.1:1/generate");
    let server = common::spawn_server(Arc::new(provider)).await;

    let (status, json) = common::post_explain(&server, "Hello world").await;
    assert_eq!(status, 200);
    let text = json["simpleExplanation"].as_str().unwrap();
    assert!(text.starts_with("AI error: GEMINI_API_KEY is missing in .env"), "got {}", text);
}

struct PanickingProvider;

#[async_trait]
impl Provider for PanickingProvider {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        panic!("provider exploded")
    }
}

#[tokio::test]
async fn e2e_handler_panic_is_generic_500() {
    let server = common::spawn_server(Arc::new(PanickingProvider)).await;

    let (status, text) = common::post_explain_raw(&server, r#"{"text":"Hello world"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(text, r#"{"error":"Server error in /api/explain"}"#);
    assert!(!text.contains("exploded"));
}
