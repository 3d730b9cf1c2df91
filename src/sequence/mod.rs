// mod.rs - Protein sequence lookup and FASTA handling

pub mod fasta;
pub mod header;
pub mod resolve;
pub mod source;

// Re-export main types for convenience
pub use fasta::{parse_fasta, FastaRecord};
pub use header::{ReviewStatus, UniProtHeader};
pub use resolve::resolve_sequence;
pub use source::fasta_url;
