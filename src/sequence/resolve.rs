// resolve.rs - Accession to sequence resolution

use super::fasta::{parse_fasta, FastaRecord};
use super::source::fasta_url;
use crate::data::EnzymeEntry;
use crate::fetch::{fetch_with_retries, PageFetcher, RetryPolicy};

/// Fetch the sequence behind an entry's accession.
///
/// Returns `None`, after logging why, when the entry has no recognised
/// accession, the lookup fails, or the response holds no FASTA record. When
/// several records come back only the first is kept.
pub fn resolve_sequence<F: PageFetcher + ?Sized>(
    fetcher: &F,
    entry: &EnzymeEntry,
    policy: &RetryPolicy,
) -> Option<FastaRecord> {
    let Some(database) = &entry.database else {
        tracing::warn!(
            enzyme = %entry.enzyme_name,
            organism = %entry.organism,
            "Unknown database type, no accession to resolve"
        );
        return None;
    };

    tracing::info!("Fetching FASTA for {} from {}", database.id, database.db_type);
    let url = match fasta_url(database) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(id = %database.id, error = %e, "No lookup URL for accession");
            return None;
        }
    };
    let text = fetch_with_retries(fetcher, url.as_str(), policy).ok()?;

    let mut records = match parse_fasta(&text) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(id = %database.id, error = %e, "Response is not FASTA");
            return None;
        }
    };

    if records.len() > 1 {
        tracing::debug!(
            id = %database.id,
            extra = records.len() - 1,
            "Keeping the first of several FASTA records"
        );
    }

    if records.is_empty() {
        None
    } else {
        Some(records.swap_remove(0))
    }
}
