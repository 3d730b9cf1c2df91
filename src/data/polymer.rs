// polymer.rs - Polymer categories listed on the landing page

use std::fmt;

/// A polymer category page linked from the landing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolymerLink {
    /// Link text, e.g. "Polyethylene terephthalate (PET)"
    pub name: String,
    /// Absolute URL of the category page
    pub url: String,
}

impl PolymerLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for PolymerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_name_and_url() {
        let link = PolymerLink::new("Polyurethane", "https://pazy.eu/doku.php?id=pur");
        assert_eq!(link.to_string(), "Polyurethane <https://pazy.eu/doku.php?id=pur>");
    }
}
