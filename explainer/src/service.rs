//! The explain operation: validate, prompt, call the provider once, always answer.

use std::sync::Arc;

use tracing::{error, info};

use crate::error::{ExplainError, ProviderError};
use crate::prompt::build_prompt;
use crate::protocol::ExplainResponse;
use crate::provider::{Provider, NO_RESPONSE_TEXT};

const CONNECTION_OK_NOTE: &str = "(But your frontend and backend connection are working fine.)";

/// Reply text used in place of a completion when the provider call fails.
pub fn provider_error_text(err: &ProviderError) -> String {
    format!("AI error: {}\n\n{}", err, CONNECTION_OK_NOTE)
}

/// Stateless request handler core. Cheap to share behind an `Arc`.
pub struct Explainer {
    provider: Arc<dyn Provider>,
}

impl Explainer {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// Explains `text`.
    ///
    /// Whitespace-only input fails with [`ExplainError::Validation`] before any provider call.
    /// A provider failure is not an error: its message becomes `simple_explanation`
    /// (see [`provider_error_text`]). `bullet_summary` is always empty.
    pub async fn explain(&self, text: &str) -> Result<ExplainResponse, ExplainError> {
        if text.trim().is_empty() {
            return Err(ExplainError::Validation);
        }
        info!(text_len = text.len(), provider = self.provider.name(), "explain called");

        let prompt = build_prompt(text);
        let simple_explanation = match self.provider.generate(&prompt).await {
            Ok(reply) if reply.is_empty() => {
                info!("provider responded with empty text");
                NO_RESPONSE_TEXT.to_string()
            }
            Ok(reply) => {
                info!(reply_len = reply.len(), "provider responded");
                reply
            }
            Err(e) => {
                error!(error = %e, "provider error");
                provider_error_text(&e)
            }
        };

        Ok(ExplainResponse {
            simple_explanation,
            bullet_summary: Vec::new(),
        })
    }
}
