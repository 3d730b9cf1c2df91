// mod.rs - Output writers: metadata TSV, FASTA and cross-reference TSV

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

use bio::io::fasta;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::crossref::CrossRefMatch;
use crate::data::ResolvedEntry;

/// File name of the metadata table inside the output directory
pub const METADATA_FILE: &str = "PAZy_metadata.tsv";

/// File name of the sequence file inside the output directory
pub const SEQUENCES_FILE: &str = "PAZy_sequences.fasta";

pub const METADATA_HEADER: [&str; 10] = [
    "Internal_ID",
    "Polymer",
    "Polymer_ID",
    "Organism",
    "Enzyme Name",
    "EC Number",
    "References",
    "Database_Type",
    "Database_ID",
    "Review_Status",
];

pub const CROSSREF_HEADER: [&str; 5] = [
    "PAZy_ID",
    "PAZy_Description",
    "PlasticDB_ID",
    "PlasticDB_Description",
    "Sequence_Length",
];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Replace characters that would break a TSV row with a single space.
pub fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect()
}

fn tsv_writer(file_path: &Path) -> Result<csv::Writer<File>, String> {
    ensure_parent_dir(file_path)?;
    WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_path(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))
}

fn write_row<W: Write>(writer: &mut csv::Writer<W>, fields: &[String]) -> Result<(), String> {
    writer
        .write_record(fields.iter().map(|f| sanitize_field(f)))
        .map_err(|e| format!("Write error: {}", e))
}

/// One metadata row per resolved entry, in the column order of [`METADATA_HEADER`].
pub fn metadata_row(resolved: &ResolvedEntry) -> Vec<String> {
    let entry = &resolved.entry;
    vec![
        resolved.internal_id.to_string(),
        entry.polymer.clone(),
        entry.polymer_id.clone(),
        entry.organism.clone(),
        entry.enzyme_name.clone(),
        entry.ec_number.clone(),
        entry.references.clone(),
        entry.database_type().to_string(),
        entry.database_id().to_string(),
        resolved.review_status.to_string(),
    ]
}

/// Write the metadata table of resolved entries
pub fn write_metadata(file_path: &Path, entries: &[ResolvedEntry]) -> Result<(), String> {
    let mut writer = tsv_writer(file_path)?;

    writer
        .write_record(METADATA_HEADER)
        .map_err(|e| format!("Write error: {}", e))?;
    for resolved in entries {
        write_row(&mut writer, &metadata_row(resolved))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    tracing::info!("Metadata for {} entries written to {}", entries.len(), file_path.display());
    Ok(())
}

/// Metadata table read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a metadata table. Rows whose field count differs from the header are
/// an error.
pub fn read_metadata(file_path: &Path) -> Result<MetadataTable, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_path(file_path)
        .map_err(|e| format!("Failed to open metadata file '{}': {}", file_path.display(), e))?;

    let header = reader
        .headers()
        .map_err(|e| format!("Failed to read header: {}", e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (line_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Failed to read line {}: {}", line_num + 2, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(MetadataTable { header, rows })
}

/// Write the tagged sequences in internal-id order
pub fn write_fasta(file_path: &Path, entries: &[ResolvedEntry]) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;
    let mut writer = fasta::Writer::new(file);

    for resolved in entries {
        resolved
            .record
            .write_to(&mut writer)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    tracing::info!("{} sequences written to {}", entries.len(), file_path.display());
    Ok(())
}

/// Write cross-reference matches between the PAZy and PlasticDB collections
pub fn write_crossref(file_path: &Path, matches: &[CrossRefMatch]) -> Result<(), String> {
    let mut writer = tsv_writer(file_path)?;

    writer
        .write_record(CROSSREF_HEADER)
        .map_err(|e| format!("Write error: {}", e))?;
    for m in matches {
        write_row(
            &mut writer,
            &[
                m.query_id.clone(),
                m.query_description.clone(),
                m.subject_id.clone(),
                m.subject_description.clone(),
                m.sequence_length.to_string(),
            ],
        )?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ {} cross-references written to: {}", matches.len(), file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DatabaseRef, DatabaseType, EnzymeEntry};
    use crate::sequence::{FastaRecord, ReviewStatus};

    fn resolved(internal_id: usize, enzyme_name: &str, database: Option<DatabaseRef>) -> ResolvedEntry {
        let record = FastaRecord::new("sp|P1|X_Y", Some("PETase OS=Bug".to_string()), b"MKV".to_vec());
        ResolvedEntry {
            internal_id,
            entry: EnzymeEntry {
                polymer: "Polyethylene terephthalate (PET)".to_string(),
                polymer_id: "PET".to_string(),
                organism: "Ideonella sakaiensis".to_string(),
                enzyme_name: enzyme_name.to_string(),
                ec_number: "3.1.1.101".to_string(),
                references: "Yoshida et al. 2016; Joo et al. 2018".to_string(),
                database,
            },
            record: record.tagged(internal_id, "PET"),
            review_status: ReviewStatus::of(&record),
        }
    }

    fn uniprot() -> Option<DatabaseRef> {
        Some(DatabaseRef {
            db_type: DatabaseType::UniProt,
            id: "P1".to_string(),
            link: "https://www.uniprot.org/uniprot/P1".to_string(),
        })
    }

    #[test]
    fn test_metadata_rows_match_header_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(METADATA_FILE);
        let entries = vec![
            resolved(1, "PETase", uniprot()),
            resolved(2, "", None),
            resolved(3, "MHETase\twith\ttabs", uniprot()),
        ];

        write_metadata(&path, &entries).unwrap();
        let table = read_metadata(&path).unwrap();

        assert_eq!(table.header, METADATA_HEADER.to_vec());
        assert_eq!(table.rows.len(), 3);
        for row in &table.rows {
            assert_eq!(row.len(), table.header.len());
        }
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[0][8], "P1");
        assert_eq!(table.rows[0][9], "Swiss-Prot");
        assert_eq!(table.rows[1][4], "");
        assert_eq!(table.rows[1][7], "");
        assert_eq!(table.rows[2][4], "MHETase with tabs");
    }

    #[test]
    fn test_header_line_is_plain_tab_separated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(METADATA_FILE);
        write_metadata(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Internal_ID\tPolymer\tPolymer_ID\tOrganism\tEnzyme Name\tEC Number\tReferences\tDatabase_Type\tDatabase_ID\tReview_Status\n"
        );
    }

    #[test]
    fn test_write_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SEQUENCES_FILE);
        write_fasta(&path, &[resolved(1, "a", uniprot()), resolved(2, "b", uniprot())]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            ">1|PET_sp|P1|X_Y PETase OS=Bug\nMKV\n>2|PET_sp|P1|X_Y PETase OS=Bug\nMKV\n"
        );
    }

    #[test]
    fn test_write_crossref() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.tsv");
        let matches = vec![CrossRefMatch {
            query_id: "1|PET_sp|P1|X_Y".to_string(),
            query_description: "1|PET_sp|P1|X_Y PETase".to_string(),
            subject_id: "PDB_0001".to_string(),
            subject_description: "PDB_0001 PETase Ideonella".to_string(),
            sequence_length: 290,
        }];

        write_crossref(&path, &matches).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], CROSSREF_HEADER.join("\t"));
        assert_eq!(
            lines[1],
            "1|PET_sp|P1|X_Y\t1|PET_sp|P1|X_Y PETase\tPDB_0001\tPDB_0001 PETase Ideonella\t290"
        );
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(sanitize_field("a\tb\r\nc"), "a b  c");
        assert_eq!(sanitize_field("plain"), "plain");
    }
}
