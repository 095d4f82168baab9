//! Retailer search links attached to each card.

use url::Url;

use crate::item::{Recommendation, RetailLink};

/// (label, search page, query parameter), in display order.
const RETAILERS: &[(&str, &str, &str)] = &[
    ("Famous Smoke", "https://www.famous-smoke.com/search", "query"),
    ("Cigars International", "https://www.cigarsinternational.com/search/", "q"),
    ("JR Cigars", "https://www.jrcigars.com/search/", "q"),
];

/// Search links for "<brand> <name>" at every retailer.
pub fn retail_links(brand: &str, name: &str) -> Vec<RetailLink> {
    let query = format!("{} {}", brand, name).trim().to_string();
    RETAILERS
        .iter()
        .filter_map(|(label, base, param)| {
            let mut url = Url::parse(base).ok()?;
            url.query_pairs_mut().append_pair(param, &query);
            Some(RetailLink {
                label: label.to_string(),
                url: url.into(),
            })
        })
        .collect()
}

/// Attaches links to every record, replacing any already present.
pub fn attach_links(items: &mut [Recommendation]) {
    for item in items {
        item.urls = retail_links(&item.brand, &item.name);
    }
}
