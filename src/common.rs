//! Common helpers shared by the aligner: minimal FASTA parsing and the crate
//! error type.
//!
//! ## FASTA
//! The parser is intentionally permissive and suitable for small/medium files
//! and tests. It supports multi-record inputs, joins wrapped sequence lines,
//! and uppercases the letters.
//!
//! ## Examples
//! ```rust
//! use nwalign::parse_fasta;
//! let recs = parse_fasta(">seq\nACGT\n>p\nPAWHEAE\n");
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].seq, "ACGT");
//! ```

/// Errors that can be returned by the aligner.
#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    /// Returned when the input holds fewer than the two records an alignment needs.
    #[error("expected at least two sequence records, found {0}")]
    MissingRecords(usize),
    /// A populated matrix cell with no predecessor flag set. This is a defect
    /// in matrix population, never a data problem; it carries the offending
    /// coordinates for diagnosis.
    #[error("inconsistent score matrix: no predecessor at row {row}, col {col}")]
    InconsistentMatrix { row: usize, col: usize },
}

/// A single FASTA sequence (identifier and uppercase sequence letters).
#[derive(Clone, Debug)]
pub struct FastaRecord {
    /// Identifier from the FASTA header (text after '>').
    pub id: String,
    /// Raw sequence (uppercase). Non-alphabetic symbols are kept as-is.
    pub seq: String,
}

/// Parse a minimal FASTA string into a vector of [`FastaRecord`].
///
/// *Lines starting with `>` start a new record.* All other lines are appended
/// (without spaces) to the current sequence. Sequences are uppercased.
pub fn parse_fasta(text: &str) -> Vec<FastaRecord> {
    let mut out: Vec<FastaRecord> = vec![];
    let mut id: Option<String> = None;
    let mut seq = String::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(id) = id.take() {
                out.push(FastaRecord { id, seq: seq.to_ascii_uppercase() });
                seq.clear();
            }
            id = Some(rest.trim().split_whitespace().next().unwrap_or("").to_string());
        } else {
            seq.push_str(line.trim());
        }
    }
    if let Some(id) = id {
        out.push(FastaRecord { id, seq: seq.to_ascii_uppercase() });
    }
    out
}

/// Pull the first two records out of FASTA text, erroring if fewer exist.
///
/// The aligner is defined over the first two records of its input file; any
/// further records are ignored.
pub fn first_two_records(text: &str) -> Result<(FastaRecord, FastaRecord), AlignError> {
    let mut recs = parse_fasta(text).into_iter();
    match (recs.next(), recs.next()) {
        (Some(a), Some(b)) => Ok((a, b)),
        (Some(_), None) => Err(AlignError::MissingRecords(1)),
        _ => Err(AlignError::MissingRecords(0)),
    }
}
