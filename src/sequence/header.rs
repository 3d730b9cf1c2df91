// header.rs - UniProtKB FASTA header parsing

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::fasta::FastaRecord;

/// ` OS=`, ` OX=`, ... key markers in the header description
static HEADER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)([A-Z]{2})=").expect("header key pattern is valid"));

/// UniProtKB section a sequence comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    /// Reviewed entry (`sp|` header)
    SwissProt,
    /// Unreviewed entry (`tr|` header)
    TrEMBL,
    /// Not a UniProtKB header (GenBank, MGnify)
    NotApplicable,
}

impl ReviewStatus {
    pub fn of(record: &FastaRecord) -> Self {
        UniProtHeader::parse(&record.header()).map_or(ReviewStatus::NotApplicable, |h| h.status)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::SwissProt => "Swiss-Prot",
            ReviewStatus::TrEMBL => "TrEMBL",
            ReviewStatus::NotApplicable => "NA",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a UniProtKB FASTA header:
/// `>db|Accession|EntryName ProteinName OS=Organism OX=TaxId GN=Gene PE=n SV=n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniProtHeader {
    pub status: ReviewStatus,
    pub accession: String,
    pub entry_name: String,
    pub description: String,
    pub organism: Option<String>,
    pub taxon_id: Option<u64>,
    pub gene: Option<String>,
}

impl UniProtHeader {
    /// Parse a header line, with or without the leading `>`.
    ///
    /// Returns `None` for headers that do not start with `sp|` or `tr|`, or
    /// that lack the accession and entry name fields.
    pub fn parse(header: &str) -> Option<Self> {
        let header = header.trim().trim_start_matches('>');
        let (identifier, rest) = header.split_once(char::is_whitespace).unwrap_or((header, ""));

        let mut parts = identifier.splitn(3, '|');
        let status = match parts.next()? {
            "sp" => ReviewStatus::SwissProt,
            "tr" => ReviewStatus::TrEMBL,
            _ => return None,
        };
        let accession = parts.next().filter(|s| !s.is_empty())?.to_string();
        let entry_name = parts.next().unwrap_or_default().to_string();

        let rest = rest.trim();
        let keys: Vec<_> = HEADER_KEY.captures_iter(rest).collect();

        let description_end = keys
            .first()
            .and_then(|c| c.get(0))
            .map_or(rest.len(), |m| m.start());
        let description = rest[..description_end].trim().to_string();

        let mut organism = None;
        let mut taxon_id = None;
        let mut gene = None;
        for (i, caps) in keys.iter().enumerate() {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value_end = keys
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(rest.len(), |m| m.start());
            let value = rest[whole.end()..value_end].trim();

            match key.as_str() {
                "OS" => organism = Some(value.to_string()),
                "OX" => taxon_id = value.parse().ok(),
                "GN" => gene = Some(value.to_string()),
                _ => {}
            }
        }

        Some(Self {
            status,
            accession,
            entry_name,
            description,
            organism,
            taxon_id,
            gene,
        })
    }
}
