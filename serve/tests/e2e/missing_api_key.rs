use super::common;
use humidor::{Recommender, RecommenderConfig};

/// **Scenario**: a server without an API key answers 500 for a valid request.
#[tokio::test]
async fn e2e_missing_api_key_is_500() {
    let (url, server) = common::spawn_server(Recommender::new(None, RecommenderConfig::default())).await;

    let (status, body) = common::post_recommend(&url, r#"{"cigar":"Padron 1964"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(common::error_message(&body), "Server missing API key");

    server.abort();
}
