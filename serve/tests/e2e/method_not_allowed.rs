use super::common;
use humidor::{Recommender, RecommenderConfig};

/// **Scenario**: GET on /recommend answers 405 with a JSON error body.
#[tokio::test]
async fn e2e_get_recommend_is_405() {
    let (url, server) = common::spawn_server(Recommender::new(None, RecommenderConfig::default())).await;

    let resp = reqwest::get(format!("{}/recommend", url)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 405);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(common::error_message(&body), "Method not allowed");

    server.abort();
}

/// **Scenario**: PUT is rejected the same way.
#[tokio::test]
async fn e2e_put_recommend_is_405() {
    let (url, server) = common::spawn_server(Recommender::new(None, RecommenderConfig::default())).await;

    let resp = reqwest::Client::new()
        .put(format!("{}/recommend", url))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 405);

    server.abort();
}
