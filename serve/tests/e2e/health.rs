use super::common;
use humidor::{Recommender, RecommenderConfig};

#[tokio::test]
async fn e2e_health_reports_ok() {
    let (url, server) = common::spawn_server(Recommender::new(None, RecommenderConfig::default())).await;

    let resp = reqwest::get(format!("{}/health", url)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    server.abort();
}
