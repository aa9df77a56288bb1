use std::sync::Arc;

use explainer::MockProvider;

use super::common;

#[tokio::test]
async fn e2e_cors_allows_browser_origin() {
    let server = common::spawn_server(Arc::new(MockProvider::with_reply("ok"))).await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/explain", server.base_url))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success(), "status {}", res.status());
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}
