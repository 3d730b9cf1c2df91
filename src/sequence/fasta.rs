// fasta.rs - FASTA records returned by the sequence services

use bio::io::fasta;
use std::io::Write;

/// A single FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited word of the header
    pub id: String,
    /// Remainder of the header, if any
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, description: Option<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description,
            sequence,
        }
    }

    /// Header line without the leading `>`.
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }

    /// Copy of this record whose header is prefixed with the internal id and
    /// polymer code: `>{internal_id}|{polymer_id}_{original header}`.
    pub fn tagged(&self, internal_id: usize, polymer_id: &str) -> Self {
        Self {
            id: format!("{}|{}_{}", internal_id, polymer_id, self.id),
            description: self.description.clone(),
            sequence: self.sequence.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Write the record; the sequence goes on a single line.
    pub fn write_to<W: Write>(&self, writer: &mut fasta::Writer<W>) -> std::io::Result<()> {
        writer.write(&self.id, self.description.as_deref(), &self.sequence)
    }
}

impl From<fasta::Record> for FastaRecord {
    fn from(record: fasta::Record) -> Self {
        Self {
            id: record.id().to_string(),
            description: record.desc().map(str::to_string),
            sequence: record.seq().to_vec(),
        }
    }
}

/// Parse FASTA text as served by UniProt, NCBI efetch or MGnify.
///
/// Blank responses yield no records; anything that is not FASTA (an HTML error
/// page, say) is an error.
pub fn parse_fasta(text: &str) -> Result<Vec<FastaRecord>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    fasta::Reader::new(trimmed.as_bytes())
        .records()
        .map(|record| {
            record
                .map(FastaRecord::from)
                .map_err(|e| format!("Invalid FASTA record: {}", e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIPROT_PETASE: &str = "\
>sp|A0A0K8P6T7|PETH_PISS1 Poly(ethylene terephthalate) hydrolase OS=Piscinibacter sakaiensis OX=1547922 GN=ISF6_4831 PE=1 SV=1
MNFPRASRLMQAAVLGGLMAVSAAATAQTNPYARGPNPTAASLEASAGPFTVRSFTVSRP
SGYGAGTVYYPTNAGGTVGAIAIVPGYTARQSSIKWWGPRLASHGFVVITIDTNSTLDQP
";

    #[test]
    fn test_parse_single_record() {
        let records = parse_fasta(UNIPROT_PETASE).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, "sp|A0A0K8P6T7|PETH_PISS1");
        assert!(record.description.as_deref().unwrap().starts_with("Poly(ethylene"));
        assert_eq!(record.len(), 120);
        assert!(record.header().starts_with("sp|A0A0K8P6T7|PETH_PISS1 Poly(ethylene"));
    }

    #[test]
    fn test_parse_multiple_and_blank() {
        let text = ">a first\nMKV\n>b\nMAAA\nLL\n";
        let records = parse_fasta(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "b");
        assert_eq!(records[1].description, None);
        assert_eq!(records[1].sequence, b"MAAALL".to_vec());

        assert!(parse_fasta("").unwrap().is_empty());
        assert!(parse_fasta("  \n\n").unwrap().is_empty());
    }

    #[test]
    fn test_html_is_not_fasta() {
        assert!(parse_fasta("<html><body>Service unavailable</body></html>").is_err());
    }

    #[test]
    fn test_tagged_header() {
        let record = FastaRecord::new("tr|Q1|Q1_BAC", Some("Cutinase OS=x".to_string()), b"MK".to_vec());
        let tagged = record.tagged(7, "PET");
        assert_eq!(tagged.header(), "7|PET_tr|Q1|Q1_BAC Cutinase OS=x");
        assert_eq!(tagged.sequence, record.sequence);
    }

    #[test]
    fn test_write_record() {
        let record = FastaRecord::new("1|PUR_x", Some("desc".to_string()), b"MKV".to_vec());
        let mut bytes = Vec::new();
        {
            let mut writer = fasta::Writer::new(&mut bytes);
            record.write_to(&mut writer).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(bytes).unwrap(), ">1|PUR_x desc\nMKV\n");
    }
}
