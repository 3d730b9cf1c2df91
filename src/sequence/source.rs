// source.rs - FASTA endpoints of the sequence databases

use url::Url;

use crate::data::{DatabaseRef, DatabaseType};

const UNIPROT_BASE: &str = "https://rest.uniprot.org/uniprotkb/";
const NCBI_EFETCH: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";
const MGNIFY_BASE: &str = "https://www.ebi.ac.uk/metagenomics/api/v1/sequences/";

/// URL serving the FASTA record of an accession.
///
/// Ids are percent-encoded as path segments for UniProt and MGnify and
/// form-encoded in the efetch query for GenBank.
pub fn fasta_url(database: &DatabaseRef) -> Result<Url, String> {
    let id = database.id.trim();
    match database.db_type {
        DatabaseType::UniProt => with_segments(UNIPROT_BASE, &[&format!("{}.fasta", id)]),
        DatabaseType::GenBank => {
            let mut url = parse_endpoint(NCBI_EFETCH)?;
            url.query_pairs_mut()
                .append_pair("db", "protein")
                .append_pair("id", id)
                .append_pair("rettype", "fasta")
                .append_pair("retmode", "text");
            Ok(url)
        }
        DatabaseType::MGnify => with_segments(MGNIFY_BASE, &[id, "fasta"]),
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, String> {
    Url::parse(endpoint).map_err(|e| format!("Invalid endpoint '{}': {}", endpoint, e))
}

/// Append `segments` to a base URL ending in `/`, each one escaped.
fn with_segments(base: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url = parse_endpoint(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("Endpoint '{}' cannot take path segments", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
