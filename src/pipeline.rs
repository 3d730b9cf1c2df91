// pipeline.rs - Landing page → polymer tables → sequences → output files

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use regex::Regex;
use url::Url;

use crate::data::{EnzymeEntry, PolymerLink, ResolvedEntry};
use crate::fetch::{fetch_with_retries, PageFetcher, RetryPolicy};
use crate::output::{self, METADATA_FILE, SEQUENCES_FILE};
use crate::scrape::{parse_enzyme_table, parse_polymer_links};
use crate::sequence::{resolve_sequence, ReviewStatus};

/// Default site root of the PAZy database
pub const DEFAULT_BASE_URL: &str = "https://pazy.eu";

/// Landing page path, relative to the site root
pub const LANDING_PAGE: &str = "doku.php?id=start";

/// Everything a harvest run needs besides the fetcher
#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub base_url: Url,
    pub output_dir: PathBuf,
    /// Pause between polymer pages
    pub polymer_delay: Duration,
    /// Pause between sequence lookups
    pub sequence_delay: Duration,
    pub landing_policy: RetryPolicy,
    pub page_policy: RetryPolicy,
    pub include_polymers: Option<Regex>,
    pub exclude_polymers: Option<Regex>,
    /// Stop after the polymer tables; no lookups, no files
    pub dry_run: bool,
}

impl HarvestSettings {
    pub fn new(base_url: Url, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url,
            output_dir: output_dir.into(),
            polymer_delay: Duration::from_secs(2),
            sequence_delay: Duration::from_secs(1),
            landing_policy: RetryPolicy::landing(),
            page_policy: RetryPolicy::page(),
            include_polymers: None,
            exclude_polymers: None,
            dry_run: false,
        }
    }

    pub fn landing_url(&self) -> Result<Url, String> {
        self.base_url
            .join(LANDING_PAGE)
            .map_err(|e| format!("Invalid landing page URL: {}", e))
    }

    fn keeps_polymer(&self, name: &str) -> bool {
        if let Some(include) = &self.include_polymers {
            if !include.is_match(name) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude_polymers {
            if exclude.is_match(name) {
                return false;
            }
        }
        true
    }
}

/// Counts and output paths of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub polymers: usize,
    pub failed_polymers: usize,
    pub entries: usize,
    pub resolved: usize,
    pub missing: usize,
    pub swissprot: usize,
    pub trembl: usize,
    pub metadata_path: Option<PathBuf>,
    pub fasta_path: Option<PathBuf>,
}

/// Sequential harvester over a [`PageFetcher`]
pub struct Harvester<F: PageFetcher> {
    fetcher: F,
    settings: HarvestSettings,
}

impl<F: PageFetcher> Harvester<F> {
    pub fn new(fetcher: F, settings: HarvestSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Run the whole harvest. Only a landing page failure or an output write
    /// failure aborts the run; individual pages and accessions are skipped.
    pub fn run(&self) -> Result<HarvestSummary, String> {
        let start = Instant::now();
        tracing::info!("Starting PAZy database scraping");

        let polymers = self.fetch_polymer_links()?;
        let mut summary = HarvestSummary {
            polymers: polymers.len(),
            ..HarvestSummary::default()
        };

        let mut entries = Vec::new();
        for (i, polymer) in polymers.iter().enumerate() {
            if i > 0 {
                self.pause(self.settings.polymer_delay);
            }
            match self.fetch_enzymes(polymer) {
                Some(found) => entries.extend(found),
                None => summary.failed_polymers += 1,
            }
        }
        summary.entries = entries.len();

        if self.settings.dry_run {
            tracing::info!(
                polymers = summary.polymers,
                entries = summary.entries,
                "Dry run complete, skipping sequence lookups"
            );
            return Ok(summary);
        }

        let (resolved, missing) = self.resolve_all(entries);
        summary.resolved = resolved.len();
        summary.missing = missing;
        summary.swissprot = count_status(&resolved, ReviewStatus::SwissProt);
        summary.trembl = count_status(&resolved, ReviewStatus::TrEMBL);

        let metadata_path = self.settings.output_dir.join(METADATA_FILE);
        let fasta_path = self.settings.output_dir.join(SEQUENCES_FILE);
        output::write_metadata(&metadata_path, &resolved)?;
        output::write_fasta(&fasta_path, &resolved)?;

        tracing::info!(
            "Scraping complete in {:.1}s. Metadata saved to {} and sequences to {}.",
            start.elapsed().as_secs_f64(),
            metadata_path.display(),
            fasta_path.display()
        );
        tracing::info!("{} PAZy entries without matching sequence were found.", missing);

        summary.metadata_path = Some(metadata_path);
        summary.fasta_path = Some(fasta_path);
        Ok(summary)
    }

    /// Fetch the landing page and list the polymer pages to visit.
    pub fn fetch_polymer_links(&self) -> Result<Vec<PolymerLink>, String> {
        let landing_url = self.settings.landing_url()?;
        tracing::info!("Fetching polymer links from {}", landing_url);

        let html = fetch_with_retries(&self.fetcher, landing_url.as_str(), &self.settings.landing_policy)
            .map_err(|e| format!("Failed to retrieve landing page: {}", e))?;

        let links = parse_polymer_links(&html, &self.settings.base_url)?;
        tracing::info!("Found {} polymer types", links.len());

        let kept: Vec<_> = links
            .into_iter()
            .filter(|link| self.settings.keeps_polymer(&link.name))
            .collect();
        if self.settings.include_polymers.is_some() || self.settings.exclude_polymers.is_some() {
            tracing::info!("{} polymer types left after filtering", kept.len());
        }
        Ok(kept)
    }

    /// Fetch and parse one polymer page. `None` when the page could not be
    /// retrieved or parsed; a page without a table yields an empty list.
    pub fn fetch_enzymes(&self, polymer: &PolymerLink) -> Option<Vec<EnzymeEntry>> {
        tracing::info!("Processing polymer: {}", polymer);

        let html = match fetch_with_retries(&self.fetcher, &polymer.url, &self.settings.page_policy) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "Failed to retrieve {} page.", polymer.name);
                return None;
            }
        };

        match parse_enzyme_table(&html, &polymer.name) {
            Ok(Some(entries)) => {
                tracing::info!("Found {} enzyme entries for {}", entries.len(), polymer.name);
                Some(entries)
            }
            Ok(None) => {
                tracing::warn!("No table found on {} page.", polymer.name);
                Some(Vec::new())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse {} page.", polymer.name);
                None
            }
        }
    }

    /// Resolve sequences in input order. Internal ids count resolved entries
    /// only. Returns the resolved entries and the number left unresolved.
    pub fn resolve_all(&self, entries: Vec<EnzymeEntry>) -> (Vec<ResolvedEntry>, usize) {
        let mut resolved = Vec::new();
        let mut missing = 0;

        for (i, entry) in entries.into_iter().enumerate() {
            if i > 0 {
                self.pause(self.settings.sequence_delay);
            }

            match resolve_sequence(&self.fetcher, &entry, &self.settings.page_policy) {
                Some(record) => {
                    let internal_id = resolved.len() + 1;
                    let review_status = ReviewStatus::of(&record);
                    let record = record.tagged(internal_id, &entry.polymer_id);
                    resolved.push(ResolvedEntry {
                        internal_id,
                        entry,
                        record,
                        review_status,
                    });
                }
                None => {
                    missing += 1;
                    tracing::warn!(
                        "Sequence not found for enzyme: {} with ID: {}",
                        entry.enzyme_name,
                        entry.database_id()
                    );
                }
            }
        }

        (resolved, missing)
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

fn count_status(entries: &[ResolvedEntry], status: ReviewStatus) -> usize {
    entries.iter().filter(|e| e.review_status == status).count()
}
