use std::sync::Arc;

use super::common;
use humidor::MockLlm;

/// **Scenario**: malformed JSON, missing cigar, non-string cigar and blank cigar all answer
/// 400 "Invalid input" without calling the model.
#[tokio::test]
async fn e2e_invalid_bodies_are_400() {
    common::load_dotenv();
    let llm = Arc::new(MockLlm::with_items(serde_json::json!([])));
    let (url, server) = common::spawn_with_llm(llm.clone()).await;

    for body in ["not json", "{}", r#"{"cigar": 42}"#, r#"{"cigar": "   "}"#] {
        let (status, json) = common::post_recommend(&url, body).await;
        assert_eq!(status, 400, "body {body:?}");
        assert_eq!(common::error_message(&json), "Invalid input");
    }
    assert_eq!(llm.calls(), 0);

    server.abort();
}
