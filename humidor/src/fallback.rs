//! Hardcoded picks served when the completion API is down and fallback is enabled.

use crate::item::{PriceTier, Recommendation, Strength};
use crate::seen::AvoidList;

/// (name, brand, price, strength, notes). All widely available in the US.
const FALLBACK: &[(&str, &str, PriceTier, i64, &[&str])] = &[
    (
        "1964 Anniversary Series Maduro",
        "Padron",
        PriceTier::Premium,
        7,
        &["cocoa", "espresso", "earth"],
    ),
    (
        "Hemingway Short Story",
        "Arturo Fuente",
        PriceTier::Moderate,
        5,
        &["cedar", "nutmeg", "cream"],
    ),
    (
        "Liga Privada No. 9",
        "Drew Estate",
        PriceTier::Premium,
        8,
        &["dark chocolate", "coffee", "leather"],
    ),
    (
        "Oliva Serie V Melanio",
        "Oliva",
        PriceTier::Premium,
        7,
        &["cocoa", "black pepper", "caramel"],
    ),
    (
        "My Father Le Bijou 1922",
        "My Father",
        PriceTier::Premium,
        8,
        &["black pepper", "espresso", "dried fruit"],
    ),
    (
        "Rocky Patel Vintage 1990",
        "Rocky Patel",
        PriceTier::Moderate,
        6,
        &["cocoa", "cedar", "toast"],
    ),
];

/// Fallback picks minus anything on the avoid list.
pub fn fallback_recommendations(avoid: &AvoidList) -> Vec<Recommendation> {
    FALLBACK
        .iter()
        .filter(|(name, ..)| !avoid.contains(name))
        .map(|(name, brand, price, strength, notes)| Recommendation {
            name: name.to_string(),
            brand: brand.to_string(),
            price_range: *price,
            strength: Strength::clamped(*strength),
            flavor_notes: notes.iter().map(|n| n.to_string()).collect(),
            urls: vec![],
        })
        .collect()
}
