use std::sync::Arc;

use super::common;
use humidor::MockLlm;
use serde_json::json;

/// **Scenario**: Cuban items are filtered, avoided items dropped, and the list padded to 3.
#[tokio::test]
async fn e2e_recommend_filters_and_pads() {
    let llm = Arc::new(MockLlm::with_items(json!([
        { "name": "Why Similar: Cohiba Siglo VI", "brand": "Cohiba", "origin": "Cuba",
          "priceRange": "$$$$", "strength": 7, "flavorNotes": "cedar, cocoa" },
        { "name": "Padron 1964 Anniversary", "brand": "Padron",
          "priceRange": "$$$", "strength": 8, "flavorNotes": ["cocoa", "espresso"] },
        { "name": "Liga Privada No. 9", "brand": "Drew Estate",
          "priceRange": "$$$", "strength": "7/10", "flavorNotes": ["leather"] }
    ])));
    let (url, server) = common::spawn_with_llm(llm.clone()).await;

    let (status, body) = common::post_recommend(
        &url,
        r#"{"cigar":"Montecristo No. 2","avoid":["liga privada no. 9"]}"#,
    )
    .await;
    assert_eq!(status, 200);
    let items = body["recommendations"].as_array().unwrap();
    assert_eq!(items.len(), 3);

    let names: Vec<&str> = items.iter().filter_map(|i| i["name"].as_str()).collect();
    assert!(names.contains(&"Padron 1964 Anniversary"), "names: {names:?}");
    assert!(!names.iter().any(|n| n.contains("Cohiba")));
    assert!(!names.iter().any(|n| n.contains("Liga Privada")));
    assert_eq!(names.iter().filter(|n| **n == "TBD").count(), 2);

    let padron = items
        .iter()
        .find(|i| i["name"] == "Padron 1964 Anniversary")
        .unwrap();
    assert_eq!(padron["priceRange"], "$$$");
    assert_eq!(padron["strength"], 8);
    assert_eq!(padron["urls"].as_array().map(Vec::len), Some(3));

    let sent = llm.last_request().unwrap();
    assert!(sent.user.contains("Montecristo No. 2"));
    assert!(sent.system.contains("liga privada no. 9"));

    server.abort();
}
