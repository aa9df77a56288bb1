//! Axum app: state, router and the two handlers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use explainer::{ExplainRequest, ExplainResponse, Explainer, GeminiProvider};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::warn;

use super::response::ApiError;

/// Body of `GET /`.
pub const HEALTH_TEXT: &str = "Backend is working with Gemini";

/// Shared state. Holds no per-request data; every request is independent.
pub struct AppState {
    pub explainer: Arc<Explainer>,
}

impl AppState {
    pub fn new(explainer: Arc<Explainer>) -> Self {
        Self { explainer }
    }

    /// Gemini provider configured from `GEMINI_API_KEY` / `GEMINI_API_URL`.
    pub fn from_env() -> Self {
        Self::new(Arc::new(Explainer::new(Arc::new(GeminiProvider::from_env()))))
    }
}

/// Builds the router: `GET /`, `POST /api/explain`, permissive CORS, panics mapped to 500.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/explain", post(explain))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_TEXT
}

async fn explain(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let Json(req) = body?;
    let text = req.text.unwrap_or_default();
    let resp = state.explainer.explain(&text).await?;
    Ok(Json(resp))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    warn!(detail, "handler panicked");
    ApiError::Unexpected(format!("panic: {}", detail)).into_response()
}
