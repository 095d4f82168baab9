//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.
//! Run tests with `--nocapture` to see them.

use std::sync::Arc;

use humidor::{LlmClient, MockLlm, Recommender, RecommenderConfig};
use serde_json::Value;
use tokio::net::TcpListener;

/// Loads .env from the current directory (or project root when run via `cargo test`).
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Bind to a random port and spawn the server. Returns (base_url, server_handle).
pub async fn spawn_server(
    recommender: Recommender,
) -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);
    let server_handle = tokio::spawn(serve::run_serve_on_listener(listener, Arc::new(recommender)));
    (url, server_handle)
}

/// Server backed by `llm` with default settings.
pub async fn spawn_with_llm(
    llm: Arc<MockLlm>,
) -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let recommender = Recommender::new(
        Some(llm as Arc<dyn LlmClient>),
        RecommenderConfig::default(),
    );
    spawn_server(recommender).await
}

/// POSTs a raw body to `/recommend`. Returns (status, parsed JSON body).
pub async fn post_recommend(base: &str, body: &str) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}/recommend", base))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", text);
    (status, serde_json::from_str(&text).unwrap())
}

/// The `error` field of an error body.
pub fn error_message(body: &Value) -> &str {
    body.get("error").and_then(Value::as_str).unwrap_or_default()
}
