// landing.rs - Polymer category links from the landing page

use scraper::Html;
use url::Url;

use super::{element_text, selector, CONTENT_TABLE};
use crate::data::PolymerLink;

/// Collect the polymer category links from the landing page.
///
/// Only wiki links (`a.wikilink1`) inside the first content table whose `href`
/// carries a page id are kept; hrefs are resolved against `base_url`. A page
/// without a content table yields no links.
pub fn parse_polymer_links(html: &str, base_url: &Url) -> Result<Vec<PolymerLink>, String> {
    let document = Html::parse_document(html);
    let table_selector = selector(CONTENT_TABLE)?;
    let link_selector = selector("a.wikilink1")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(Vec::new());
    };

    let mut links = Vec::new();
    for anchor in table.select(&link_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains("id=") {
            continue;
        }

        match base_url.join(href) {
            Ok(url) => links.push(PolymerLink::new(element_text(&anchor, ""), url.to_string())),
            Err(e) => tracing::warn!(href, error = %e, "Skipping unresolvable polymer link"),
        }
    }

    Ok(links)
}
