//! Gemini `generateContent` over REST.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Provider;
use crate::error::ProviderError;

/// Default endpoint (model `gemini-2.5-flash`). Override with `GEMINI_API_URL`.
pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Returned when the provider answered but carried no usable text.
pub const NO_RESPONSE_TEXT: &str = "No response text from Gemini.";

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Gemini client. The credential travels as the `key` query parameter.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    url: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            url: url.into(),
        }
    }

    /// Reads `GEMINI_API_KEY` and `GEMINI_API_URL`. A missing key is allowed here;
    /// it surfaces as [`ProviderError::MissingApiKey`] on each call.
    pub fn from_env() -> Self {
        let url = std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_URL.to_string());
        Self::new(std::env::var("GEMINI_API_KEY").ok(), url)
    }
}

/// Request body: `{"contents":[{"parts":[{"text": prompt}]}]}`.
fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// First candidate's first part text, or [`NO_RESPONSE_TEXT`] when absent or empty.
fn extract_text(body: &Value) -> String {
    body.pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_RESPONSE_TEXT)
        .to_string()
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        // Errors are built with `without_url`: the query string carries the credential.
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let res = self
            .client
            .post(&self.url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))?;
        Ok(extract_text(&body))
    }
}
