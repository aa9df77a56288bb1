use std::sync::Arc;

use explainer::MockProvider;

use super::common;

#[tokio::test]
async fn e2e_health_returns_plain_text() {
    let server = common::spawn_server(Arc::new(MockProvider::with_reply("unused"))).await;

    let res = reqwest::get(format!("{}/", server.base_url)).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "content-type: {}", content_type);
    assert_eq!(res.text().await.unwrap(), serve::HEALTH_TEXT);
}
