use super::common;
use humidor::{Recommender, RecommenderConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30 }
    })
}

fn config_for(server: &MockServer) -> RecommenderConfig {
    RecommenderConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some(server.uri()),
        ..RecommenderConfig::default()
    }
}

/// **Scenario**: the OpenAI client talks to a stand-in API and the reply flows through.
#[tokio::test]
async fn e2e_recommend_through_openai_client() {
    let upstream = MockServer::start().await;
    let reply = json!({ "recommendations": [
        { "name": "Oliva Serie V Melanio", "brand": "Oliva", "priceRange": "$$$",
          "strength": 6, "flavorNotes": ["nutmeg", "cedar"] }
    ]})
    .to_string();
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&reply)))
        .mount(&upstream)
        .await;

    let (url, server) = common::spawn_server(Recommender::from_config(config_for(&upstream))).await;

    let (status, body) = common::post_recommend(&url, r#"{"cigar":"Padron 2000"}"#).await;
    assert_eq!(status, 200);
    let items = body["recommendations"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().any(|i| i["name"] == "Oliva Serie V Melanio"));

    server.abort();
}

/// **Scenario**: the stand-in API rejects the key; the endpoint answers 502.
#[tokio::test]
async fn e2e_openai_rejection_is_502() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&upstream)
        .await;

    let (url, server) = common::spawn_server(Recommender::from_config(config_for(&upstream))).await;

    let (status, _) = common::post_recommend(&url, r#"{"cigar":"Padron 2000"}"#).await;
    assert_eq!(status, 502);

    server.abort();
}
