//! Render client: validate input, post it once, split the reply for display.
//!
//! Mirrors the web form it replaces: one trigger ([`SubmitControl`]) that is disabled while a
//! request is in flight, a loading indicator, a single generic error banner, and a total parse
//! of the reply via [`explainer::parse_explanation`].

mod control;
mod http;
mod render;

pub use control::{Busy, Indicator, StderrIndicator, SubmitControl};
pub use http::{raw_explanation, HttpTransport, DEFAULT_URL};
pub use render::{render, write_view, OutputFormat};

use async_trait::async_trait;
use explainer::{parse_explanation, ParsedExplanation};
use thiserror::Error;
use tracing::{debug, warn};

/// Shown for empty or whitespace-only input. No request is made.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some text first.";
/// Shown for any transport, status or decode failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("bad response from backend: {status} {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON from server: {0}")]
    Decode(String),
}

/// How the client reaches the handler.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `text` and returns the raw `simpleExplanation` (absent when missing or `null`).
    async fn explain(&self, text: &str) -> Result<Option<String>, ClientError>;
}

/// What to show after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Local validation failed; nothing was sent.
    Invalid(String),
    /// The request failed; the message is generic.
    Failed(String),
    /// A submit was already in flight on this control.
    Ignored,
    Explained(ParsedExplanation),
}

/// Submits `text` once through `transport`.
///
/// Input is trimmed; empty input yields [`View::Invalid`] without touching the control or the
/// transport. Otherwise the control is disabled and the indicator shown for the duration of the
/// call, and restored on every exit path.
pub async fn submit<T, I>(text: &str, transport: &T, control: &mut SubmitControl<I>) -> View
where
    T: Transport + ?Sized,
    I: Indicator,
{
    let text = text.trim();
    if text.is_empty() {
        return View::Invalid(EMPTY_INPUT_MESSAGE.to_string());
    }

    let Some(_busy) = control.begin() else {
        debug!("submit ignored: request already in flight");
        return View::Ignored;
    };

    match transport.explain(text).await {
        Ok(raw) => View::Explained(parse_explanation(raw.as_deref())),
        Err(e) => {
            warn!(error = %e, "explain request failed");
            View::Failed(GENERIC_ERROR_MESSAGE.to_string())
        }
    }
}
