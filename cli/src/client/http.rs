//! [`Transport`] over HTTP (reqwest).

use async_trait::async_trait;
use explainer::ExplainRequest;
use serde_json::Value;
use tracing::debug;

use super::{ClientError, Transport};

/// Where the server listens by default.
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// Posts to `<base_url>/api/explain`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/explain", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `simpleExplanation` from a response body. Strings are taken as is, `null` or missing is
/// `None`, anything else is rendered as its JSON text.
pub fn raw_explanation(body: &Value) -> Option<String> {
    match body.get("simpleExplanation")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn explain(&self, text: &str) -> Result<Option<String>, ClientError> {
        debug!(endpoint = %self.endpoint, text_len = text.len(), "posting explain request");
        let res = self
            .client
            .post(&self.endpoint)
            .json(&ExplainRequest::new(text))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(raw_explanation(&body))
    }
}
