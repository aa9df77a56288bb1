//! Error types for the explain pipeline.

use thiserror::Error;

/// Why a provider call produced no completion.
///
/// The `Display` text is user-visible: [`crate::Explainer`] embeds it in the reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is missing in .env")]
    MissingApiKey,
    #[error("Gemini HTTP error: {status} {body}")]
    Http { status: u16, body: String },
    #[error("Gemini request failed: {0}")]
    Transport(String),
    #[error("Gemini response could not be decoded: {0}")]
    Decode(String),
}

/// Errors surfaced by [`crate::Explainer::explain`]. Provider failures never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// Input was absent, empty, or whitespace only.
    #[error("Text is required")]
    Validation,
}
