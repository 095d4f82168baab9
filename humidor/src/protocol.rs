//! Wire types for `POST /recommend`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::item::Recommendation;
use crate::seen::{AvoidList, SEEN_CAP};

/// Request body: `{ "cigar": string, "avoid": string[] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub cigar: String,
    #[serde(default)]
    pub avoid: Vec<String>,
}

impl RecommendRequest {
    pub fn new(cigar: impl Into<String>, avoid: Vec<String>) -> Self {
        Self {
            cigar: cigar.into(),
            avoid,
        }
    }

    /// Reads a body the way the endpoint does: anything unparseable counts as `{}`,
    /// a non-string `cigar` as missing, a non-array `avoid` as empty. Non-string and
    /// empty `avoid` entries are dropped; at most [`SEEN_CAP`] are kept.
    pub fn from_body_lenient(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let cigar = value
            .get("cigar")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let avoid = value
            .get("avoid")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .take(SEEN_CAP)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { cigar, avoid }
    }

    pub fn avoid_list(&self) -> AvoidList {
        AvoidList::new(&self.avoid)
    }
}

/// Success body: `{ "recommendations": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Error body: `{ "error": string }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
