//! System and user prompts for the completion call.

use crate::seen::AvoidList;

/// Upper bound (exclusive) for the per-request variety seed.
pub const SEED_RANGE: u32 = 1_000_000;

/// System prompt: JSON-only persona, variety seed, avoid list and output restrictions.
pub fn system_prompt(seed: u32, avoid: &AvoidList) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("You are a cigar expert who replies ONLY with JSON.\n");
    out.push_str(&format!("Random seed: {seed}.\n"));
    out.push_str(
        "Vary your recommendations: when asked about the same cigar again, do not repeat \
         the same picks.\n",
    );
    if !avoid.is_empty() {
        out.push_str("NEVER include any of these AVOID items: ");
        out.push_str(&avoid.names().join("; "));
        out.push_str(".\n");
    }
    out.push_str(
        "NEVER include fields named \"why\", \"similarity\" or \"differences\", and never write \
         prose starting with \"Why Similar\" or \"Key Differences\".\n",
    );
    out.push_str("Return ONLY these fields per item: name, brand, priceRange, strength, flavorNotes.\n");
    out.push_str(
        "Output exactly 3 unique recommendations spanning at least 2 different brands and, \
         when possible, different regions or strength levels.",
    );
    out
}

/// User prompt: the cigar, the rules and the exact reply shape.
pub fn user_prompt(cigar: &str) -> String {
    format!(
        r#"Given the cigar "{cigar}", recommend EXACTLY 3 different cigars that someone who enjoys this cigar would also like.
Rules:
- Do not repeat any item from the AVOID list (if present).
- Prefer a mix of brands, regions and strengths so results differ across calls.
Provide ONLY these fields:
1) name (string)
2) brand (string)
3) priceRange ($, $$, $$$, or $$$$)
4) strength (1-10)
5) flavorNotes (array of 3-4 short notes)

Respond ONLY with a JSON object in this shape:
{{
  "recommendations": [
    {{
      "name": "string",
      "brand": "string",
      "priceRange": "string",
      "strength": number,
      "flavorNotes": ["note1", "note2", "note3"]
    }}
  ]
}}"#
    )
}
