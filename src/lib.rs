//! # nwalign
//!
//! Needleman-Wunsch **global pairwise alignment** with a linear gap penalty.
//!
//! This crate computes one optimal end-to-end alignment of two sequences
//! under a configurable match/mismatch/gap integer scoring scheme. The
//! engine builds a `(shorter+1) x (longer+1)` score matrix, records every
//! optimal predecessor per cell, and walks the matrix back from the last
//! cell with a fixed tie-break (diagonal, then left, then up) so results are
//! reproducible.
//!
//! The algorithm is alphabet-agnostic: any symbols with well-defined
//! equality align, nucleotides and amino acids being the practical cases.
//! Each call owns its matrix, so concurrent independent alignments are fine.
//!
//! ### Example
//! ```
//! use nwalign::{align, ScoringConfig};
//! let aln = align("GAT", "GT", &ScoringConfig::default()).unwrap();
//! assert_eq!(aln.align_a, "GAT");
//! assert_eq!(aln.align_b, "G-T");
//! assert_eq!(aln.score, 6);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod common;
pub mod global;
pub mod matrix;

pub use common::{first_two_records, parse_fasta, AlignError, FastaRecord};
pub use global::{align, populate, traceback, GlobalAlignment, ScoringConfig, GAP};
pub use matrix::{Cell, ScoreMatrix};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fasta_to_alignment_end_to_end() {
        let text = ">first\nGATT\nACA\n>second description text\nGCATGCU\n>ignored\nAAAA\n";
        let (a, b) = first_two_records(text).unwrap();
        assert_eq!(a.id, "first");
        assert_eq!(b.id, "second");
        assert_eq!(a.seq, "GATTACA");
        let aln = align(&a.seq, &b.seq, &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a.len(), aln.align_b.len());
        let stripped: String = aln.align_a.chars().filter(|&c| c != GAP).collect();
        assert_eq!(stripped, "GATTACA");
    }

    #[test]
    fn fasta_with_one_record_is_rejected() {
        let err = first_two_records(">only\nACGT\n").unwrap_err();
        assert!(matches!(err, AlignError::MissingRecords(1)));
    }

    #[test]
    fn fasta_sequences_are_uppercased() {
        let recs = parse_fasta(">x\nacgt\n>y\ntt\ngg\n");
        assert_eq!(recs[0].seq, "ACGT");
        assert_eq!(recs[1].seq, "TTGG");
    }
}
