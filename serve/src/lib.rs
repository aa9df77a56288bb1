//! HTTP server for the explainer (axum).
//!
//! Listens on `127.0.0.1:5000` by default (`EXPLAINER_ADDR` overrides) and serves
//! `GET /` (plain-text health) and `POST /api/explain`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`], [`AppState`].

mod app;
mod response;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

pub use app::{router, AppState, HEALTH_TEXT};
pub use response::ApiError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Listen address from `EXPLAINER_ADDR`, falling back to [`DEFAULT_ADDR`].
pub fn addr_from_env() -> String {
    std::env::var("EXPLAINER_ADDR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

/// Serves on an existing listener until `shutdown` resolves. Tests bind `127.0.0.1:0` and pass
/// the listener together with a state built around a mock or stand-in provider.
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        provider = state.explainer.provider().name(),
        credential_present = state.explainer.provider().has_credential(),
        "server running on http://{}",
        addr
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Runs the server on `addr` (default from [`addr_from_env`]) with the Gemini provider
/// configured from the environment. Stops on Ctrl-C.
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.map(str::to_string).unwrap_or_else(addr_from_env);
    info!("starting server...");
    let listener = TcpListener::bind(&addr).await?;
    run_serve_on_listener(listener, Arc::new(AppState::from_env()), async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
