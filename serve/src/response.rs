//! Mapping of handler failures to HTTP status + `{ "error": ... }` JSON.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use explainer::{ErrorBody, ExplainError};
use thiserror::Error;
use tracing::{error, info};

/// Handler failure. Provider failures are not represented: they are answered with 200.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable text in the request.
    #[error("text is required")]
    TextRequired,
    /// Anything else. The detail is logged, never sent.
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<ExplainError> for ApiError {
    fn from(e: ExplainError) -> Self {
        match e {
            ExplainError::Validation => ApiError::TextRequired,
        }
    }
}

/// A body that is not JSON (or not declared as JSON) carries no text and is a 400;
/// JSON whose `text` has the wrong type, or an unreadable body, is a 500.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                info!(reason = %rejection.body_text(), "request body has no readable text");
                ApiError::TextRequired
            }
            other => ApiError::Unexpected(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::TextRequired => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::text_required())).into_response()
            }
            ApiError::Unexpected(detail) => {
                error!(detail = %detail, "error in /api/explain handler");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::server_error())).into_response()
            }
        }
    }
}
