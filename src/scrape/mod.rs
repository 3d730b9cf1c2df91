// mod.rs - HTML scraping of the PAZy wiki pages

pub mod enzyme_table;
pub mod landing;
pub mod polymer;

// Re-export main functions for convenience
pub use enzyme_table::parse_enzyme_table;
pub use landing::parse_polymer_links;
pub use polymer::polymer_abbreviation;

use scraper::{ElementRef, Selector};

/// CSS selector of the content tables on PAZy pages
pub(crate) const CONTENT_TABLE: &str = "table.inline";

pub(crate) fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("Invalid CSS selector '{}': {}", css, e))
}

/// Text content of an element: every text node trimmed, empty ones dropped,
/// the rest joined with `separator`.
pub(crate) fn element_text(element: &ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_element_text_separators() {
        let html = Html::parse_fragment("<p> Ideonella <i>sakaiensis</i> , PETase </p>");
        let p = html.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(element_text(&p, " "), "Ideonella sakaiensis , PETase");
        assert_eq!(element_text(&p, ""), "Ideonellasakaiensis, PETase");
    }

    #[test]
    fn test_invalid_selector() {
        assert!(selector("table[").is_err());
    }
}
