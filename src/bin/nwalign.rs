//! Command-line interface for the `nwalign` crate.
//!
//! Reads a FASTA file, globally aligns its first two records, and prints the
//! two gapped sequences (first record's alignment first).
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nwalign::{align, first_two_records, ScoringConfig};

#[derive(Debug, Parser)]
#[command(
    name = "nwalign",
    version = env!("CARGO_PKG_VERSION"),
    about = "Needleman-Wunsch global alignment of the first two records in a FASTA file"
)]
struct Cli {
    /// FASTA file containing at least two sequence records.
    filename: PathBuf,
    /// Override the scoring scheme: match reward, mismatch penalty, gap
    /// penalty (defaults: 4 -2 -2).
    #[arg(short, long, num_args = 3, value_names = ["MATCH", "MISMATCH", "GAP"], allow_negative_numbers = true)]
    manual: Option<Vec<i32>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.manual {
        Some(v) => ScoringConfig { match_score: v[0], mismatch_penalty: v[1], gap_penalty: v[2] },
        None => ScoringConfig::default(),
    };

    let text = fs::read_to_string(&cli.filename)
        .with_context(|| format!("read FASTA: {}", cli.filename.display()))?;
    let (a, b) = first_two_records(&text)
        .with_context(|| format!("parse FASTA: {}", cli.filename.display()))?;

    let aln = align(&a.seq, &b.seq, &config)?;
    println!("{}", aln.align_a);
    println!("{}", aln.align_b);
    Ok(())
}
