//! # Explainer
//!
//! Core of a small "explain this text" service: pasted text goes into a fixed prompt template,
//! one call is made to a generative-AI provider, and the raw completion comes back verbatim.
//!
//! ## Main modules
//!
//! - [`protocol`]: wire types for `POST /api/explain` ([`ExplainRequest`], [`ExplainResponse`], [`ErrorBody`]).
//! - [`prompt`]: [`build_prompt`], the instruction template asking for `Explanation:` / `Bullets:` sections.
//! - [`provider`]: [`Provider`] trait, [`GeminiProvider`] (REST), [`MockProvider`].
//! - [`service`]: [`Explainer`], which validates input and folds provider failures into the reply text.
//! - [`parse`]: [`parse_explanation`], a total splitter of the raw reply into paragraph + bullets.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use explainer::{Explainer, GeminiProvider};
//!
//! # async fn demo() -> Result<(), explainer::ExplainError> {
//! let provider = GeminiProvider::from_env();
//! let service = Explainer::new(Arc::new(provider));
//! let resp = service.explain("Photosynthesis converts light into chemical energy.").await?;
//! let parsed = explainer::parse_explanation(Some(resp.simple_explanation.as_str()));
//! println!("{:?}", parsed);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod parse;
pub mod prompt;
pub mod protocol;
pub mod provider;
pub mod service;

pub use error::{ExplainError, ProviderError};
pub use parse::{parse_explanation, ParsedExplanation, NO_EXPLANATION_MESSAGE};
pub use prompt::build_prompt;
pub use protocol::{ErrorBody, ExplainRequest, ExplainResponse, SERVER_ERROR_MESSAGE, TEXT_REQUIRED_MESSAGE};
pub use provider::{GeminiProvider, MockProvider, Provider, DEFAULT_GEMINI_URL};
pub use service::{provider_error_text, Explainer};
