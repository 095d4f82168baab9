//! Plain-text cards for the terminal.

use humidor::item::{MAX_STRENGTH, MIN_STRENGTH};
use humidor::{strip_boilerplate, Recommendation, Strength};

const UNKNOWN_NAME: &str = "Unknown cigar";
const DOT_ON: char = '●';
const DOT_OFF: char = '○';

/// Ten dots, the first `strength` of them filled, e.g. `●●●●●●●○○○ 7/10`.
pub fn strength_bar(strength: Strength) -> String {
    let filled = strength.get().clamp(MIN_STRENGTH, MAX_STRENGTH);
    let dots: String = (1..=MAX_STRENGTH)
        .map(|i| if i <= filled { DOT_ON } else { DOT_OFF })
        .collect();
    format!("{} {}/{}", dots, filled, MAX_STRENGTH)
}

/// One card: heading, brand line, strength bar, price badge, flavor notes, retailer links.
pub fn render_card(rec: &Recommendation) -> String {
    let name = strip_boilerplate(&rec.name);
    let heading = if name.is_empty() { UNKNOWN_NAME } else { name.as_str() };
    let mut lines = vec![heading.to_string()];

    let brand = strip_boilerplate(&rec.brand);
    if !brand.is_empty() {
        lines.push(format!("  {}", brand));
    }
    lines.push(format!("  Strength {}", strength_bar(rec.strength)));
    lines.push(format!("  [{}]", rec.price_range));

    let notes: Vec<String> = rec
        .flavor_notes
        .iter()
        .map(|n| strip_boilerplate(n))
        .filter(|n| !n.is_empty())
        .collect();
    if !notes.is_empty() {
        lines.push(format!("  {}", notes.join(" · ")));
    }
    for link in &rec.urls {
        lines.push(format!("  {}: {}", link.label, link.url));
    }
    lines.join("\n")
}

/// All cards separated by blank lines.
pub fn render_cards(recs: &[Recommendation]) -> String {
    recs.iter().map(render_card).collect::<Vec<_>>().join("\n\n")
}

pub fn status_line(count: usize) -> String {
    if count == 0 {
        "No recommendations found.".to_string()
    } else {
        format!("Found {} recommendations.", count)
    }
}
