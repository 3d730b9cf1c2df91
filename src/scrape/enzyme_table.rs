// enzyme_table.rs - Enzyme rows from a polymer page

use scraper::Html;

use super::polymer::polymer_abbreviation;
use super::{element_text, selector, CONTENT_TABLE};
use crate::data::{DatabaseRef, EnzymeEntry};

/// Columns a row needs before it is treated as an enzyme entry
const MIN_CELLS: usize = 6;

/// Parse the enzyme table of a polymer page.
///
/// Returns `Ok(None)` when the page has no content table, so callers can tell
/// a missing table from an empty one. The first row is the header and is
/// always skipped, as are rows with fewer than six cells.
///
/// Column layout:
/// 0. host organism and enzyme/gene name, separated by the first comma
/// 1. EC number
/// 2. references, one anchor each
/// 3. accession links; the first recognised database link is used
pub fn parse_enzyme_table(html: &str, polymer_name: &str) -> Result<Option<Vec<EnzymeEntry>>, String> {
    let document = Html::parse_document(html);
    let table_selector = selector(CONTENT_TABLE)?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td, th")?;
    let anchor_selector = selector("a")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let polymer_id = polymer_abbreviation(polymer_name);
    let mut entries = Vec::new();

    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        let host_enzyme_gene = element_text(&cells[0], " ");
        let (organism, enzyme_name) = split_host_and_enzyme(&host_enzyme_gene);

        let references = cells[2]
            .select(&anchor_selector)
            .map(|a| element_text(&a, ""))
            .collect::<Vec<_>>()
            .join("; ");

        let database = cells[3].select(&anchor_selector).find_map(|a| {
            let href = a.value().attr("href").unwrap_or_default();
            DatabaseRef::classify(href, &element_text(&a, ""))
        });

        entries.push(EnzymeEntry {
            polymer: polymer_name.to_string(),
            polymer_id: polymer_id.clone(),
            organism,
            enzyme_name,
            ec_number: element_text(&cells[1], ""),
            references,
            database,
        });
    }

    Ok(Some(entries))
}

/// "Ideonella sakaiensis, PETase" → ("Ideonella sakaiensis", "PETase").
/// Without a comma the whole text is the organism.
fn split_host_and_enzyme(text: &str) -> (String, String) {
    match text.split_once(',') {
        Some((organism, enzyme)) => (organism.trim().to_string(), enzyme.trim().to_string()),
        None => (text.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatabaseType;

    const PET_PAGE: &str = r#"
        <html><body>
        <h1>Polyethylene terephthalate (PET)</h1>
        <table class="inline">
          <tr><th>Host, enzyme</th><th>EC</th><th>Ref</th><th>ID</th><th>Seq</th><th>Structure</th></tr>
          <tr>
            <td><em>Ideonella sakaiensis</em> 201-F6, PETase, ISF6_4831</td>
            <td>3.1.1.101</td>
            <td><a href="https://doi.org/10.1126/science.aad6359">Yoshida et al. 2016</a>
                <a href="https://doi.org/10.1038/s41467-018-02881-1">Joo et al. 2018</a></td>
            <td><a class="urlextern" href="https://doi.org/x">paper</a>
                <a class="urlextern" href="https://www.uniprot.org/uniprot/A0A0K8P6T7">A0A0K8P6T7_IDESA</a>
                <a href="https://www.ncbi.nlm.nih.gov/protein/GAP38373.1">GAP38373.1</a></td>
            <td>yes</td><td>5XJH</td>
          </tr>
          <tr>
            <td>Thermobifida fusca, TfH</td><td>3.1.1.-</td><td></td>
            <td><a href="https://www.ncbi.nlm.nih.gov/protein/AAZ54921.1">AAZ54921.1</a></td>
            <td></td><td></td>
          </tr>
          <tr><td>incomplete row</td><td>3.1.1.1</td></tr>
          <tr>
            <td>uncultured bacterium</td><td></td><td></td>
            <td>not deposited</td><td></td><td></td>
          </tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_rows() {
        let entries = parse_enzyme_table(PET_PAGE, "Polyethylene terephthalate (PET)")
            .unwrap()
            .unwrap();
        assert_eq!(entries.len(), 3);

        let petase = &entries[0];
        assert_eq!(petase.polymer, "Polyethylene terephthalate (PET)");
        assert_eq!(petase.polymer_id, "PET");
        assert_eq!(petase.organism, "Ideonella sakaiensis 201-F6");
        assert_eq!(petase.enzyme_name, "PETase, ISF6_4831");
        assert_eq!(petase.ec_number, "3.1.1.101");
        assert_eq!(petase.references, "Yoshida et al. 2016; Joo et al. 2018");

        // First recognised link wins, the DOI anchor is skipped
        let db = petase.database.as_ref().unwrap();
        assert_eq!(db.db_type, DatabaseType::UniProt);
        assert_eq!(db.id, "A0A0K8P6T7");

        let tfh = &entries[1];
        assert_eq!(tfh.organism, "Thermobifida fusca");
        assert_eq!(tfh.enzyme_name, "TfH");
        assert_eq!(tfh.references, "");
        assert_eq!(tfh.database_type(), "GenBank");
        assert_eq!(tfh.database_id(), "AAZ54921.1");

        let uncultured = &entries[2];
        assert_eq!(uncultured.organism, "uncultured bacterium");
        assert_eq!(uncultured.enzyme_name, "");
        assert!(uncultured.database.is_none());
    }

    #[test]
    fn test_missing_table() {
        assert!(parse_enzyme_table("<p>No data yet</p>", "Nylon").unwrap().is_none());
    }

    #[test]
    fn test_header_only_table() {
        let html = r#"<table class="inline"><tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr></table>"#;
        assert_eq!(parse_enzyme_table(html, "Nylon").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_split_host_and_enzyme() {
        assert_eq!(
            split_host_and_enzyme("Fusarium solani pisi, cutinase"),
            ("Fusarium solani pisi".to_string(), "cutinase".to_string())
        );
        assert_eq!(
            split_host_and_enzyme("Pseudomonas sp."),
            ("Pseudomonas sp.".to_string(), String::new())
        );
    }
}
