use std::sync::Arc;

use super::common;
use humidor::{LlmClient, MockLlm, Recommender, RecommenderConfig};

/// **Scenario**: a failing model answers 502 with the apology text.
#[tokio::test]
async fn e2e_upstream_failure_is_502() {
    let llm = Arc::new(MockLlm::failing("rate limited"));
    let (url, server) = common::spawn_with_llm(llm).await;

    let (status, body) = common::post_recommend(&url, r#"{"cigar":"Padron 1964"}"#).await;
    assert_eq!(status, 502);
    assert_eq!(
        common::error_message(&body),
        "Sorry, our cigar recommender is temporarily unavailable. Please try again later."
    );

    server.abort();
}

/// **Scenario**: with the fallback enabled, the same failure answers 200 with three items.
#[tokio::test]
async fn e2e_upstream_failure_with_fallback_is_200() {
    let llm: Arc<dyn LlmClient> = Arc::new(MockLlm::failing("rate limited"));
    let config = RecommenderConfig {
        fallback_on_upstream_error: true,
        ..RecommenderConfig::default()
    };
    let (url, server) = common::spawn_server(Recommender::new(Some(llm), config)).await;

    let (status, body) = common::post_recommend(&url, r#"{"cigar":"Padron 1964"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(3));

    server.abort();
}
