// polymer.rs - Polymer abbreviations used to tag sequences

use regex::Regex;
use std::sync::LazyLock;

static PARENTHESIZED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Z]+)\)").expect("abbreviation pattern is valid"));

/// Short code for a polymer name.
///
/// Rules, first match wins:
/// 1. an uppercase code in parentheses: "Polyethylene terephthalate (PET)" → "PET"
/// 2. names starting with "polyethylene terephthalate" → "PET"
/// 3. names starting with "polyurethane" → "PUR"
/// 4. the first three characters, uppercased
pub fn polymer_abbreviation(name: &str) -> String {
    if let Some(caps) = PARENTHESIZED_CODE.captures(name) {
        return caps[1].to_string();
    }

    let lower = name.to_lowercase();
    if lower.starts_with("polyethylene terephthalate") {
        "PET".to_string()
    } else if lower.starts_with("polyurethane") {
        "PUR".to_string()
    } else {
        name.chars().take(3).collect::<String>().to_uppercase()
    }
}
