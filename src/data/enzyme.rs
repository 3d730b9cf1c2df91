// enzyme.rs - Enzyme rows scraped from polymer pages

use std::fmt;

use crate::sequence::{FastaRecord, ReviewStatus};

/// Sequence database an accession link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    UniProt,
    GenBank,
    MGnify,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::UniProt => "UniProt",
            DatabaseType::GenBank => "GenBank",
            DatabaseType::MGnify => "MGnify",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accession link found in the database column of an enzyme row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseRef {
    pub db_type: DatabaseType,
    pub id: String,
    pub link: String,
}

impl DatabaseRef {
    /// Classify an anchor by its `href` and link text.
    ///
    /// UniProt links carry entry names like `A0A0K8P6T7_9BURK`; only the part
    /// before the first underscore is the accession.
    pub fn classify(href: &str, text: &str) -> Option<Self> {
        let href_lower = href.to_lowercase();
        let text = text.trim();

        let (db_type, id) = if href_lower.contains("uniprot") {
            (
                DatabaseType::UniProt,
                text.split('_').next().unwrap_or_default(),
            )
        } else if href_lower.contains("genbank") || href_lower.contains("ncbi.nlm.nih.gov") {
            (DatabaseType::GenBank, text)
        } else if href_lower.contains("ebi.ac.uk") || text.to_lowercase().contains("mgyp") {
            (DatabaseType::MGnify, text)
        } else {
            return None;
        };

        Some(Self {
            db_type,
            id: id.to_string(),
            link: href.to_string(),
        })
    }
}

/// One enzyme row of a polymer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnzymeEntry {
    pub polymer: String,
    pub polymer_id: String,
    pub organism: String,
    pub enzyme_name: String,
    pub ec_number: String,
    pub references: String,
    pub database: Option<DatabaseRef>,
}

impl EnzymeEntry {
    pub fn database_type(&self) -> &str {
        self.database.as_ref().map_or("", |d| d.db_type.as_str())
    }

    pub fn database_id(&self) -> &str {
        self.database.as_ref().map_or("", |d| d.id.as_str())
    }
}

/// An enzyme whose accession resolved to a sequence.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    /// 1-based, assigned in input order to resolved entries only
    pub internal_id: usize,
    pub entry: EnzymeEntry,
    /// Record with the tagged header written to the FASTA output
    pub record: FastaRecord,
    pub review_status: ReviewStatus,
}
