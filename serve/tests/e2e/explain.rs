use std::sync::Arc;

use explainer::{parse_explanation, MockProvider};

use super::common;

const REPLY: &str = "Explanation:\nFoo bar.\n\nBullets:\n- A\n- B\n- C";

#[tokio::test]
async fn e2e_explain_returns_provider_text() {
    let mock = Arc::new(MockProvider::with_reply(REPLY));
    let server = common::spawn_server(mock.clone()).await;

    let (status, json) = common::post_explain(&server, "Hello world").await;
    assert_eq!(status, 200);
    assert_eq!(json["simpleExplanation"], REPLY);
    assert_eq!(json["bulletSummary"], serde_json::json!([]));
    assert_eq!(mock.calls(), 1);

    let parsed = parse_explanation(json["simpleExplanation"].as_str());
    assert_eq!(parsed.explanation, "Foo bar.");
    assert_eq!(parsed.bullets, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn e2e_empty_text_is_400_without_provider_call() {
    let mock = Arc::new(MockProvider::with_reply(REPLY));
    let server = common::spawn_server(mock.clone()).await;

    for body in [r#"{"text":""}"#, r#"{"text":"   \n"}"#, r#"{}"#, r#"{"text":null}"#] {
        let (status, text) = common::post_explain_raw(&server, body).await;
        assert_eq!(status, 400, "body {}", body);
        assert_eq!(text, r#"{"error":"Text is required"}"#);
    }
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn e2e_requests_are_independent() {
    let mock = Arc::new(MockProvider::with_reply(REPLY));
    let server = common::spawn_server(mock.clone()).await;

    let (a, b) = tokio::join!(
        common::post_explain(&server, "first"),
        common::post_explain(&server, "second")
    );
    assert_eq!(a.0, 200);
    assert_eq!(b.0, 200);
    assert_eq!(a.1, b.1);
    assert_eq!(mock.calls(), 2);
}
