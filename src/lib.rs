// lib.rs - pazyscrape library root

//! # pazyscrape - PAZy enzyme metadata and sequence harvester
//!
//! This library scrapes the PAZy database of plastics-active enzymes, resolves
//! every enzyme accession to its protein sequence and writes two flat files:
//! a tab-separated metadata table and a FASTA file of the sequences.
//!
//! ## Features
//!
//! - **Scraping**: landing page and polymer tables parsed with CSS selectors
//! - **Sequence lookup**: UniProt, NCBI GenBank and MGnify FASTA endpoints
//! - **Resilience**: bounded retries with exponential backoff, polite pacing
//! - **Review status**: Swiss-Prot and TrEMBL headers told apart
//! - **Cross-referencing**: exact sequence matches against PlasticDB
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pazyscrape::prelude::*;
//!
//! let base_url = url::Url::parse("https://pazy.eu").map_err(|e| e.to_string())?;
//! let settings = HarvestSettings::new(base_url, "pazy_output");
//! let fetcher = HttpFetcher::new(true)?;
//!
//! let summary = Harvester::new(fetcher, settings).run()?;
//! println!("{} sequences, {} missing", summary.resolved, summary.missing);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod crossref;
pub mod data;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod scrape;
pub mod sequence;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config};
    pub use crate::crossref::{find_matches, CrossRefMatch, IndexOptions, SequenceIndex};
    pub use crate::data::{DatabaseRef, DatabaseType, EnzymeEntry, PolymerLink, ResolvedEntry};
    pub use crate::fetch::{fetch_with_retries, FetchError, HttpFetcher, PageFetcher, RetryPolicy};
    pub use crate::output::{write_crossref, write_fasta, write_metadata};
    pub use crate::pipeline::{HarvestSettings, HarvestSummary, Harvester};
    pub use crate::scrape::{parse_enzyme_table, parse_polymer_links, polymer_abbreviation};
    pub use crate::sequence::{parse_fasta, FastaRecord, ReviewStatus, UniProtHeader};
}

// Re-export main types at the root level for convenience
pub use data::{EnzymeEntry, PolymerLink};
pub use fetch::{FetchError, PageFetcher};
pub use pipeline::{HarvestSettings, HarvestSummary, Harvester};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("pazyscrape v{} - PAZy enzyme metadata and sequence harvester", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_carries_version() {
        let info = get_info();
        assert!(info.starts_with("pazyscrape v"));
        assert!(info.contains(VERSION));
    }
}
