//! US-market filter: drops cigars that are Cuban products.
//!
//! Classification works on loose substrings of brand, name, origin, owner and factory. A
//! number of brands exist both as Cuban (Habanos) and as non-Cuban US lines; those are only
//! dropped on an explicit Cuban signal so the US counterparts survive.
//!
//! [`filter_market`] fails open: if any record cannot be classified, every record is kept.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::MarketError;

/// Brands sold under the same name in Cuba and in the US.
const DUAL_MARKET_BRANDS: &[&str] = &[
    "cohiba",
    "montecristo",
    "romeo y julieta",
    "h. upmann",
    "h upmann",
    "partagás",
    "partagas",
    "trinidad",
    "bolivar",
    "punch",
    "ramon allones",
    "quai d'orsay",
];

/// Factory or line hints that mark a dual-market item as the Cuban one.
const CUBAN_HINTS: &[&str] = &[
    "el laguito",
    "partagas factory",
    "la corona",
    "habana",
    "habano",
];

/// Marks in a product name that only Cuban cigars carry. Factory hints such as "la corona"
/// also name non-Cuban lines, so outside the dual-market brands only these two count.
const CUBAN_NAME_MARKS: &[&str] = &["habana", "habano"];

const ORIGIN_KEYS: &[&str] = &["origin", "country", "country_of_origin", "countryOfOrigin"];
const OWNER_KEYS: &[&str] = &["brand_owner", "owner", "brandOwner"];
const NAME_KEYS: &[&str] = &["name", "line"];

/// Market-relevant fields of one record. All optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketMetadata {
    pub origin: Option<String>,
    pub owner: Option<String>,
    pub factory: Option<String>,
    pub brand: Option<String>,
    pub name: Option<String>,
}

impl MarketMetadata {
    /// Reads the fields from a model-emitted object. Each field takes the first key in its
    /// alias list holding a non-empty string (`origin` > `country` > `country_of_origin`,
    /// `brand_owner` > `owner`, `name` > `line`); other value types are ignored.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            origin: first_text(obj, ORIGIN_KEYS),
            owner: first_text(obj, OWNER_KEYS),
            factory: first_text(obj, &["factory"]),
            brand: first_text(obj, &["brand"]),
            name: first_text(obj, NAME_KEYS),
        }
    }

    /// Metadata from brand and name only.
    pub fn from_brand_and_name(brand: &str, name: &str) -> Self {
        Self {
            brand: Some(brand.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn field(value: &Option<String>) -> String {
        value.as_deref().unwrap_or("").trim().to_lowercase()
    }
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Whether a record belongs to the Cuban market. True only on a confident signal.
pub fn is_cuban(meta: &MarketMetadata) -> bool {
    let origin = MarketMetadata::field(&meta.origin);
    let owner = MarketMetadata::field(&meta.owner);
    let factory = MarketMetadata::field(&meta.factory);
    let brand = MarketMetadata::field(&meta.brand);
    let name = MarketMetadata::field(&meta.name);

    if origin == "cuba" || origin == "cu" {
        return true;
    }
    if owner.contains("habanos") {
        return true;
    }

    if DUAL_MARKET_BRANDS.iter().any(|b| brand.contains(b)) {
        if !origin.is_empty() {
            return false;
        }
        return CUBAN_HINTS
            .iter()
            .any(|h| factory.contains(h) || name.contains(h));
    }

    CUBAN_NAME_MARKS.iter().any(|m| name.contains(m))
}

/// A rule deciding whether a record is excluded from the market.
pub trait MarketRule: Send + Sync {
    fn is_excluded(&self, meta: &MarketMetadata) -> Result<bool, MarketError>;
}

/// Excludes Cuban cigars (see [`is_cuban`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct UsMarket;

impl MarketRule for UsMarket {
    fn is_excluded(&self, meta: &MarketMetadata) -> Result<bool, MarketError> {
        Ok(is_cuban(meta))
    }
}

/// Keeps records the rule does not exclude. On any classification error the whole input is
/// returned unchanged.
pub fn filter_market<T, F>(items: Vec<T>, rule: &dyn MarketRule, meta_of: F) -> Vec<T>
where
    F: Fn(&T) -> MarketMetadata,
{
    let mut verdicts = Vec::with_capacity(items.len());
    for item in &items {
        match rule.is_excluded(&meta_of(item)) {
            Ok(excluded) => verdicts.push(excluded),
            Err(e) => {
                warn!(error = %e, "market filter error, keeping all records");
                return items;
            }
        }
    }
    items
        .into_iter()
        .zip(verdicts)
        .filter_map(|(item, excluded)| (!excluded).then_some(item))
        .collect()
}
