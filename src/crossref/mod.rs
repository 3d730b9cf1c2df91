// mod.rs - Sequence-identity cross-referencing of two FASTA collections

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};

/// Options for building a [`SequenceIndex`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Keep full sequences so matches can be checked beyond the hash
    pub verify_exact: bool,
    /// Keep only the first record of every distinct sequence
    pub no_duplicates: bool,
}

/// A record of the indexed (reference) collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub id: String,
    /// Full header text, id included
    pub description: String,
    pub length: usize,
    /// Present only when indexed with `verify_exact`
    pub sequence: Option<Vec<u8>>,
}

/// One PAZy record whose sequence is identical to an indexed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRefMatch {
    pub query_id: String,
    pub query_description: String,
    pub subject_id: String,
    pub subject_description: String,
    pub sequence_length: usize,
}

/// MD5 of the uppercased sequence, as lowercase hex
pub fn sequence_digest(sequence: &[u8]) -> String {
    format!("{:x}", md5::compute(sequence.to_ascii_uppercase()))
}

fn header_text(record: &fasta::Record) -> String {
    match record.desc() {
        Some(desc) => format!("{} {}", record.id(), desc),
        None => record.id().to_string(),
    }
}

fn open_fasta(path: &Path) -> Result<fasta::Reader<BufReader<File>>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;
    Ok(fasta::Reader::new(file))
}

fn spinner(unit: &str) -> Result<ProgressBar, String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{{spinner}} [{{elapsed_precise}}] {{pos}} {} ({{per_sec}}) {{msg}}",
            unit
        ))
        .map_err(|e| format!("Invalid progress template: {}", e))?,
    );
    Ok(pb)
}

/// Reference sequences keyed by the digest of their sequence
#[derive(Debug, Default)]
pub struct SequenceIndex {
    records: HashMap<String, Vec<IndexedRecord>>,
    pub total_records: usize,
    pub duplicates_removed: usize,
    verify_exact: bool,
}

impl SequenceIndex {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            verify_exact: options.verify_exact,
            ..Self::default()
        }
    }

    /// Index every record of a FASTA file.
    pub fn from_fasta(path: &Path, options: IndexOptions) -> Result<Self, String> {
        println!("🧬 Indexing reference sequences: {}", path.display());
        let mut index = Self::new(options);
        let reader = open_fasta(path)?;
        let pb = spinner("sequences")?;

        for record in reader.records() {
            let record = record
                .map_err(|e| format!("Invalid FASTA record in {}: {}", path.display(), e))?;
            index.insert(&record, options.no_duplicates);
            pb.inc(1);
        }

        pb.finish_with_message(format!("✅ {} unique sequences", index.unique_sequences()));
        if options.no_duplicates {
            println!("🧹 Removed {} duplicate sequences", index.duplicates_removed);
        }
        Ok(index)
    }

    /// Add one record. With `no_duplicates`, a record whose sequence is
    /// already indexed is counted and dropped.
    pub fn insert(&mut self, record: &fasta::Record, no_duplicates: bool) {
        self.total_records += 1;
        let sequence = record.seq().to_ascii_uppercase();
        let digest = sequence_digest(&sequence);

        if no_duplicates && self.records.contains_key(&digest) {
            self.duplicates_removed += 1;
            return;
        }

        let indexed = IndexedRecord {
            id: record.id().to_string(),
            description: header_text(record),
            length: sequence.len(),
            sequence: self.verify_exact.then_some(sequence),
        };
        self.records.entry(digest).or_default().push(indexed);
    }

    pub fn unique_sequences(&self) -> usize {
        self.records.len()
    }

    /// Indexed records whose sequence matches `sequence` (case-insensitive).
    pub fn lookup(&self, sequence: &[u8]) -> Vec<&IndexedRecord> {
        let upper = sequence.to_ascii_uppercase();
        let Some(candidates) = self.records.get(&sequence_digest(&upper)) else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|c| match &c.sequence {
                Some(indexed) if self.verify_exact => *indexed == upper,
                _ => true,
            })
            .collect()
    }
}

/// Match every record of the PAZy FASTA against the index.
pub fn find_matches(index: &SequenceIndex, pazy_fasta: &Path) -> Result<Vec<CrossRefMatch>, String> {
    println!("🔍 Matching PAZy sequences: {}", pazy_fasta.display());
    let reader = open_fasta(pazy_fasta)?;
    let pb = spinner("PAZy sequences")?;
    let mut matches = Vec::new();

    for record in reader.records() {
        let record = record
            .map_err(|e| format!("Invalid FASTA record in {}: {}", pazy_fasta.display(), e))?;

        for subject in index.lookup(record.seq()) {
            matches.push(CrossRefMatch {
                query_id: record.id().to_string(),
                query_description: header_text(&record),
                subject_id: subject.id.clone(),
                subject_description: subject.description.clone(),
                sequence_length: subject.length,
            });
        }

        pb.inc(1);
        pb.set_message(format!("{} matches", matches.len()));
    }

    pb.finish_with_message(format!("✅ {} matches", matches.len()));
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fasta_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const PLASTICDB: &str = "\
>PDB_1 PETase Ideonella sakaiensis
MNFPRASRLM
QAAVLGG
>PDB_2 PETase duplicate entry
mnfprasrlmqaavlgg
>PDB_3 Cutinase
MKKLLAV
";

    #[test]
    fn test_sequence_digest_is_case_insensitive() {
        assert_eq!(sequence_digest(b"mkv"), sequence_digest(b"MKV"));
        assert_eq!(sequence_digest(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_index_keeps_duplicates_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = fasta_file(&dir, "plasticdb.fasta", PLASTICDB);

        let index = SequenceIndex::from_fasta(&path, IndexOptions::default()).unwrap();
        assert_eq!(index.total_records, 3);
        assert_eq!(index.unique_sequences(), 2);

        let hits = index.lookup(b"MNFPRASRLMQAAVLGG");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].description, "PDB_1 PETase Ideonella sakaiensis");
        assert_eq!(hits[0].length, 17);
        assert!(hits[0].sequence.is_none());
    }

    #[test]
    fn test_index_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = fasta_file(&dir, "plasticdb.fasta", PLASTICDB);

        let options = IndexOptions {
            verify_exact: false,
            no_duplicates: true,
        };
        let index = SequenceIndex::from_fasta(&path, options).unwrap();
        assert_eq!(index.duplicates_removed, 1);

        let hits = index.lookup(b"MNFPRASRLMQAAVLGG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PDB_1");
    }

    #[test]
    fn test_verify_exact_keeps_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let path = fasta_file(&dir, "plasticdb.fasta", PLASTICDB);

        let options = IndexOptions {
            verify_exact: true,
            no_duplicates: false,
        };
        let index = SequenceIndex::from_fasta(&path, options).unwrap();
        let hits = index.lookup(b"mkkllav");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sequence.as_deref(), Some(&b"MKKLLAV"[..]));
    }

    #[test]
    fn test_find_matches() {
        let dir = tempfile::tempdir().unwrap();
        let reference = fasta_file(&dir, "plasticdb.fasta", PLASTICDB);
        let pazy = fasta_file(
            &dir,
            "pazy.fasta",
            ">1|PET_sp|A0A0K8P6T7|PETH_PISS1 PETase\nMNFPRASRLMQAAVLGG\n>2|PUR_tr|Q1|Q1_X PueA\nMAAAAA\n>3|PET_x Cut\nmkkllav\n",
        );

        let index = SequenceIndex::from_fasta(&reference, IndexOptions::default()).unwrap();
        let matches = find_matches(&index, &pazy).unwrap();

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].query_id, "1|PET_sp|A0A0K8P6T7|PETH_PISS1");
        assert_eq!(matches[0].query_description, "1|PET_sp|A0A0K8P6T7|PETH_PISS1 PETase");
        assert_eq!(matches[0].subject_id, "PDB_1");
        assert_eq!(matches[1].subject_id, "PDB_2");
        assert_eq!(matches[2].query_id, "3|PET_x");
        assert_eq!(matches[2].subject_id, "PDB_3");
        assert_eq!(matches[2].sequence_length, 7);
    }

    #[test]
    fn test_missing_file() {
        let err = SequenceIndex::from_fasta(Path::new("/nonexistent/plasticdb.fasta"), IndexOptions::default())
            .unwrap_err();
        assert!(err.contains("Failed to open FASTA file"));
    }
}
