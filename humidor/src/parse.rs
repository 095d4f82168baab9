//! Parse the model's reply into raw, unvalidated items.
//!
//! The reply is supposed to be a JSON object `{ "recommendations": [...] }`, but models wrap
//! it in fences or prose often enough that extraction is best-effort. Total failure yields an
//! empty list; the normalizer pads it.

use serde_json::{Map, Value};

use crate::market::MarketMetadata;

/// One item as the model emitted it. Every field may be missing or mistyped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawItem {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price_range: Option<Value>,
    pub strength: Option<Value>,
    pub flavor_notes: Option<Value>,
    /// Extra market fields (origin, owner, factory) the model may have added.
    pub market: MarketMetadata,
}

impl RawItem {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            name: obj.get("name").and_then(value_to_text),
            brand: obj.get("brand").and_then(value_to_text),
            price_range: obj
                .get("priceRange")
                .or_else(|| obj.get("price_range"))
                .cloned(),
            strength: obj.get("strength").cloned(),
            flavor_notes: obj
                .get("flavorNotes")
                .or_else(|| obj.get("flavor_notes"))
                .cloned(),
            market: MarketMetadata::from_object(obj),
        }
    }
}

/// Text form of a scalar JSON value; `None` for null, arrays and objects.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract the JSON payload from raw model output.
///
/// Fenced blocks (```` ```json … ``` ````) are unwrapped; otherwise the widest `{…}` or
/// `[…]` span is used, whichever opens first.
pub fn extract_json(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or("");
        let body = body.rfind("```").map(|end| &body[..end]).unwrap_or(body);
        return Some(body.trim());
    }
    let object_first = match (trimmed.find('{'), trimmed.find('[')) {
        (Some(brace), Some(bracket)) => brace < bracket,
        (_, None) => true,
        (None, Some(_)) => false,
    };
    if object_first {
        span(trimmed, '{', '}').or_else(|| span(trimmed, '[', ']'))
    } else {
        span(trimmed, '[', ']').or_else(|| span(trimmed, '{', '}'))
    }
}

fn span(s: &str, open: char, close: char) -> Option<&str> {
    let start = s.find(open)?;
    let end = s.rfind(close)?;
    (end > start).then(|| &s[start..=end])
}

/// Parse raw model output into items. Accepts `{ "recommendations": [...] }` or a bare array;
/// non-object entries are dropped.
pub fn parse_reply(raw: &str) -> Vec<RawItem> {
    let Some(json) = extract_json(raw) else {
        return vec![];
    };
    let value: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "model reply is not valid JSON");
            return vec![];
        }
    };
    let list = match value {
        Value::Object(mut obj) => match obj.remove("recommendations") {
            Some(Value::Array(items)) => items,
            _ => vec![],
        },
        Value::Array(items) => items,
        _ => vec![],
    };
    list.iter()
        .filter_map(Value::as_object)
        .map(RawItem::from_object)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_recommendations_object() {
        let raw = json!({
            "recommendations": [
                {"name": "1964 Anniversary", "brand": "Padron", "priceRange": "$$$",
                 "strength": 7, "flavorNotes": ["cocoa", "espresso"]},
                "not an object",
                {"name": 42}
            ]
        })
        .to_string();
        let items = parse_reply(&raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("1964 Anniversary"));
        assert_eq!(items[0].brand.as_deref(), Some("Padron"));
        assert_eq!(items[0].strength, Some(json!(7)));
        assert_eq!(items[1].name.as_deref(), Some("42"));
        assert_eq!(items[1].brand, None);
    }

    #[test]
    fn unwraps_fenced_block() {
        let raw = "```json\n{\"recommendations\":[{\"name\":\"A\"}]}\n```";
        assert_eq!(parse_reply(raw).len(), 1);
    }

    #[test]
    fn falls_back_to_braces_inside_prose() {
        let raw = "Sure! {\"recommendations\":[{\"name\":\"A\"},{\"name\":\"B\"}]} Enjoy.";
        assert_eq!(parse_reply(raw).len(), 2);
    }

    #[test]
    fn accepts_bare_array() {
        assert_eq!(parse_reply("[{\"name\":\"A\"}]").len(), 1);
    }

    #[test]
    fn bare_array_of_several_objects_inside_prose() {
        let raw = "Here you go: [{\"name\":\"A\"},{\"name\":\"B\"}] cheers";
        assert_eq!(extract_json(raw), Some("[{\"name\":\"A\"},{\"name\":\"B\"}]"));
        assert_eq!(parse_reply(raw).len(), 2);
    }

    #[test]
    fn object_holding_array_still_wins_when_it_opens_first() {
        let raw = "{\"recommendations\":[{\"name\":\"A\"}]}";
        assert_eq!(extract_json(raw), Some(raw));
    }

    #[test]
    fn garbage_yields_empty_list() {
        assert!(parse_reply("no json here").is_empty());
        assert!(parse_reply("{ broken").is_empty());
        assert!(parse_reply("{\"recommendations\": \"none\"}").is_empty());
        assert!(parse_reply("").is_empty());
    }

    #[test]
    fn captures_market_fields() {
        let raw = r#"{"recommendations":[{"name":"Siglo VI","brand":"Cohiba","country":"Cuba"}]}"#;
        let items = parse_reply(raw);
        assert_eq!(items[0].market.origin.as_deref(), Some("Cuba"));
    }

    /// **Scenario**: duplicate aliases or a numeric brand do not wipe the origin.
    #[test]
    fn market_fields_survive_aliases_and_numeric_brand() {
        let raw = json!([
            {"name": "Siglo VI", "brand": "Cohiba", "origin": "Cuba", "country": "Cuba"},
            {"name": "Robusto", "line": "Siglo", "brand": "Cohiba", "origin": "Cuba"},
            {"name": "Siglo VI", "brand": 1966, "origin": "Cuba"}
        ])
        .to_string();
        let items = parse_reply(&raw);
        assert_eq!(items.len(), 3);
        for item in &items {
            assert_eq!(item.market.origin.as_deref(), Some("Cuba"));
        }
        assert_eq!(items[2].brand.as_deref(), Some("1966"));
    }
}
