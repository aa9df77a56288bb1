//! Provider abstraction: turns a prompt into a completion string.
//!
//! [`crate::Explainer`] depends only on [`Provider`]; [`GeminiProvider`] is the real REST
//! client and [`MockProvider`] serves tests and offline runs.

mod gemini;
mod mock;

pub use gemini::{GeminiProvider, DEFAULT_GEMINI_URL, NO_RESPONSE_TEXT};
pub use mock::MockProvider;

use async_trait::async_trait;

use crate::error::ProviderError;

/// One outbound completion call. No retries, no timeout beyond the transport default.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name for logs, e.g. `"gemini"`.
    fn name(&self) -> &str;

    /// Whether a credential is configured. Used only for the startup log line.
    fn has_credential(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
