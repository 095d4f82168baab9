//! Recommendation record returned to clients, with its price tier and strength scales.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest and highest strength on the 1–10 scale.
pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 10;
/// Strength used when the model gives nothing usable.
pub const DEFAULT_STRENGTH: u8 = 5;

/// Four-step price scale, serialized as `$` … `$$$$`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[default]
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// Dollar-sign form used on the wire and on cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Premium => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }

    fn from_dollars(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(PriceTier::Budget),
            2 => Some(PriceTier::Moderate),
            3 => Some(PriceTier::Premium),
            _ => Some(PriceTier::Luxury),
        }
    }

    /// Best-effort read of whatever the model put in `priceRange`.
    ///
    /// Longest run of `$` wins (`"$$ - $$$"` is `$$$`); otherwise a few tier words are
    /// recognised. Everything else is [`PriceTier::Moderate`].
    pub fn parse_lenient(raw: &str) -> Self {
        let longest_run = raw
            .split(|c| c != '$')
            .map(str::len)
            .max()
            .unwrap_or(0);
        if let Some(tier) = Self::from_dollars(longest_run) {
            return tier;
        }

        let lower = raw.trim().to_lowercase();
        const WORDS: [(&str, PriceTier); 10] = [
            ("budget", PriceTier::Budget),
            ("cheap", PriceTier::Budget),
            ("low", PriceTier::Budget),
            ("moderate", PriceTier::Moderate),
            ("medium", PriceTier::Moderate),
            ("mid", PriceTier::Moderate),
            ("premium", PriceTier::Premium),
            ("high", PriceTier::Premium),
            ("luxury", PriceTier::Luxury),
            ("ultra", PriceTier::Luxury),
        ];
        WORDS
            .iter()
            .find(|(word, _)| lower.contains(word))
            .map(|(_, tier)| *tier)
            .unwrap_or_default()
    }

    /// Reads a JSON value; only strings carry a tier.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self::parse_lenient(s),
            _ => PriceTier::default(),
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength rating, always within 1..=10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Strength(u8);

impl Strength {
    /// Clamps any integer into range.
    pub fn clamped(value: i64) -> Self {
        Strength(value.clamp(MIN_STRENGTH as i64, MAX_STRENGTH as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Reads a JSON value the way a loose integer parse would.
    ///
    /// Numbers are truncated, strings use their leading integer (`"7/10"` is 7). Zero,
    /// missing or non-numeric values give [`DEFAULT_STRENGTH`].
    pub fn from_value(value: Option<&Value>) -> Self {
        let parsed = match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Some(Value::String(s)) => leading_integer(s),
            _ => None,
        };
        match parsed {
            Some(v) if v != 0 => Self::clamped(v),
            _ => Strength::default(),
        }
    }
}

impl Default for Strength {
    fn default() -> Self {
        Strength(DEFAULT_STRENGTH)
    }
}

impl From<i64> for Strength {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Strength> for u8 {
    fn from(value: Strength) -> Self {
        value.0
    }
}

/// Leading base-10 integer of `s`: optional whitespace, optional sign, digits.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Overlong digit strings saturate; they clamp to the top of the scale anyway.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// One retailer search link on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailLink {
    pub label: String,
    pub url: String,
}

/// One recommended cigar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub name: String,
    pub brand: String,
    pub price_range: PriceTier,
    pub strength: Strength,
    pub flavor_notes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<RetailLink>,
}

impl Recommendation {
    /// Name shown when the model returned too few usable items.
    pub const PLACEHOLDER_NAME: &'static str = "TBD";

    /// Filler entry used to pad short result lists.
    pub fn placeholder() -> Self {
        Self {
            name: Self::PLACEHOLDER_NAME.to_string(),
            ..Default::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == Self::PLACEHOLDER_NAME && self.brand.is_empty()
    }
}
