//! Normalize model output into exactly [`RESULT_COUNT`] clean recommendations.
//!
//! Models like to prefix fields with "Why Similar:" or "Key Differences:" prose even when
//! told not to; those prefixes are stripped and notes that are nothing but such prose are
//! dropped. Strength is clamped, duplicates by (name, brand) removed, the list shuffled for
//! variety and padded with placeholders.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde_json::Value;

use crate::item::{PriceTier, Recommendation, Strength};
use crate::market::MarketMetadata;
use crate::parse::{value_to_text, RawItem};
use crate::seen::AvoidList;

/// Number of recommendations in every response.
pub const RESULT_COUNT: usize = 3;

static WHY_SIMILAR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Why Similar:\s*").expect("valid regex"));
static KEY_DIFFERENCES_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Key Differences?:\s*").expect("valid regex"));
static BOILERPLATE_NOTE: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)^why\s+similar").expect("valid regex"),
        Regex::new(r"(?i)^key\s+differences?").expect("valid regex"),
    ]
});

/// A cleaned record plus the market fields used only for filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub recommendation: Recommendation,
    pub market: MarketMetadata,
}

impl Candidate {
    /// Metadata for the market filter: cleaned brand and name over whatever the model sent.
    pub fn market_metadata(&self) -> MarketMetadata {
        MarketMetadata {
            brand: Some(self.recommendation.brand.clone()),
            name: Some(self.recommendation.name.clone()),
            ..self.market.clone()
        }
    }
}

/// Removes a leading "Why Similar:" and then "Key Difference(s):", and trims.
pub fn strip_boilerplate(s: &str) -> String {
    let s = WHY_SIMILAR_PREFIX.replace(s, "");
    let s = KEY_DIFFERENCES_PREFIX.replace(&s, "");
    s.trim().to_string()
}

/// Flavor notes: stripped, non-empty, and not boilerplate prose. Non-arrays give no notes.
pub fn clean_notes(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(notes)) = value else {
        return vec![];
    };
    notes
        .iter()
        .filter_map(value_to_text)
        .map(|n| strip_boilerplate(&n))
        .filter(|n| !n.is_empty())
        .filter(|n| !BOILERPLATE_NOTE.iter().any(|rx| rx.is_match(n)))
        .collect()
}

/// Cleans one raw item. Missing text fields become empty strings.
pub fn clean_item(raw: RawItem) -> Candidate {
    let recommendation = Recommendation {
        name: raw.name.as_deref().map(strip_boilerplate).unwrap_or_default(),
        brand: raw.brand.as_deref().map(strip_boilerplate).unwrap_or_default(),
        price_range: PriceTier::from_value(raw.price_range.as_ref()),
        strength: Strength::from_value(raw.strength.as_ref()),
        flavor_notes: clean_notes(raw.flavor_notes.as_ref()),
        urls: vec![],
    };
    Candidate {
        recommendation,
        market: raw.market,
    }
}

/// Drops raw items whose name is on the avoid list.
pub fn drop_avoided(items: Vec<RawItem>, avoid: &AvoidList) -> Vec<RawItem> {
    if avoid.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|it| {
            let name = it.name.as_deref().map(strip_boilerplate).unwrap_or_default();
            !avoid.contains(&name)
        })
        .collect()
}

/// Keeps the first record of each case-insensitive (name, brand) pair.
pub fn dedup_by_name_and_brand(items: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|r| seen.insert((r.name.to_lowercase(), r.brand.to_lowercase())))
        .collect()
}

/// Shuffles, keeps at most [`RESULT_COUNT`] and pads with placeholders up to it.
pub fn finalize<R: Rng + ?Sized>(mut items: Vec<Recommendation>, rng: &mut R) -> Vec<Recommendation> {
    items.shuffle(rng);
    items.truncate(RESULT_COUNT);
    items.resize_with(RESULT_COUNT, Recommendation::placeholder);
    items
}
