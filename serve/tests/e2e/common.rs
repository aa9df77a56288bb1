//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`;
//! run with `--nocapture` to see them.

use std::sync::Arc;

use explainer::{Explainer, Provider};
use serve::{run_serve_on_listener, AppState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running server. Dropping it shuts the server down.
pub struct TestServer {
    pub base_url: String,
    _shutdown: oneshot::Sender<()>,
}

/// Binds a random port and serves with the given provider. Returns once the listener is bound.
pub async fn spawn_server(provider: Arc<dyn Provider>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(Arc::new(Explainer::new(provider))));
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(run_serve_on_listener(listener, state, async move {
        let _ = rx.await;
    }));
    TestServer {
        base_url: format!("http://{}", addr),
        _shutdown: tx,
    }
}

/// POSTs raw `body` with a JSON content type. Returns status and body text.
pub async fn post_explain_raw(server: &TestServer, body: &str) -> (u16, String) {
    let res = reqwest::Client::new()
        .post(format!("{}/api/explain", server.base_url))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = res.status().as_u16();
    let text = res.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, text)
}

/// POSTs `{"text": text}` and parses the JSON response.
pub async fn post_explain(server: &TestServer, text: &str) -> (u16, serde_json::Value) {
    let body = serde_json::json!({ "text": text }).to_string();
    let (status, text) = post_explain_raw(server, &body).await;
    (status, serde_json::from_str(&text).unwrap())
}
