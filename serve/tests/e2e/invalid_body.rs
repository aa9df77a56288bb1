use std::sync::Arc;

use explainer::MockProvider;

use super::common;

#[tokio::test]
async fn e2e_non_json_body_is_400() {
    let mock = Arc::new(MockProvider::with_reply("unused"));
    let server = common::spawn_server(mock.clone()).await;

    let (status, text) = common::post_explain_raw(&server, "not valid json").await;
    assert_eq!(status, 400);
    assert_eq!(text, r#"{"error":"Text is required"}"#);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn e2e_missing_content_type_is_400() {
    let server = common::spawn_server(Arc::new(MockProvider::with_reply("unused"))).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/explain", server.base_url))
        .body(r#"{"text":"Hello"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[tokio::test]
async fn e2e_wrong_text_type_is_generic_500() {
    let mock = Arc::new(MockProvider::with_reply("unused"));
    let server = common::spawn_server(mock.clone()).await;

    let (status, text) = common::post_explain_raw(&server, r#"{"text":42}"#).await;
    assert_eq!(status, 500);
    assert_eq!(text, r#"{"error":"Server error in /api/explain"}"#);
    assert_eq!(mock.calls(), 0);
}
