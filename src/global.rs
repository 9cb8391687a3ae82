//! Needleman-Wunsch global alignment with a linear gap penalty.
use crate::common::AlignError;
use crate::matrix::ScoreMatrix;

/// Gap marker used in aligned output strings.
pub const GAP: char = '-';

/// Linear scoring scheme for global alignment.
///
/// The three values are arbitrary signed integers; the algorithm is correct
/// for any of them, though a positive match with non-positive penalties is
/// what makes biological sense. The scheme is passed explicitly into every
/// run, so independent alignments never share scoring state.
#[derive(Clone, Copy, Debug)]
pub struct ScoringConfig {
    /// Reward for aligning two equal symbols.
    pub match_score: i32,
    /// Penalty for aligning two unequal symbols.
    pub mismatch_penalty: i32,
    /// Penalty per gap symbol (linear, no open/extend distinction).
    pub gap_penalty: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { match_score: 4, mismatch_penalty: -2, gap_penalty: -2 }
    }
}

/// A global alignment computed by Needleman-Wunsch.
#[derive(Clone, Debug)]
pub struct GlobalAlignment {
    /// Total alignment score under the supplied [`ScoringConfig`].
    pub score: i32,
    /// Aligned string for A (including gaps `-`).
    pub align_a: String,
    /// Aligned string for B (including gaps `-`).
    pub align_b: String,
}

/// Compute one optimal global alignment of `seq_a` and `seq_b`.
///
/// Returns two equal-length gapped strings in the same order as the inputs;
/// stripping the gaps from each reproduces the corresponding input exactly.
/// Empty sequences are valid and align all-gaps against the other sequence.
///
/// When co-optimal alignments exist, the one returned is determined by the
/// fixed traceback priority (diagonal, then left, then up), so repeated runs
/// always produce the same result.
pub fn align(seq_a: &str, seq_b: &str, config: &ScoringConfig) -> Result<GlobalAlignment, AlignError> {
    let mut matrix = ScoreMatrix::new(seq_a, seq_b);
    populate(&mut matrix, config);
    let score = matrix.cell(matrix.rows() - 1, matrix.cols() - 1).value;
    let (horiz, vert) = traceback(&matrix)?;
    // Hand the strings back in the caller's argument order.
    let (align_a, align_b) = if matrix.swapped() { (vert, horiz) } else { (horiz, vert) };
    Ok(GlobalAlignment { score, align_a, align_b })
}

/// Fill every cell of `matrix` per the Needleman-Wunsch recurrence.
///
/// Row 0 and column 0 accumulate pure gap penalties; each interior cell takes
/// the best of its diagonal, upper and left predecessors. All predecessors
/// that tie for the best value get their flag set, so traceback sees the full
/// tie set. Pure function of the matrix and config; cell `(i, j)` depends
/// only on already-filled neighbors, so one row-major sweep suffices.
pub fn populate(matrix: &mut ScoreMatrix, config: &ScoringConfig) {
    let gap = config.gap_penalty;
    for row in 1..matrix.rows() {
        let cell = matrix.cell_mut(row, 0);
        cell.value = gap * row as i32;
        cell.from_up = true;
    }
    for col in 1..matrix.cols() {
        let cell = matrix.cell_mut(0, col);
        cell.value = gap * col as i32;
        cell.from_left = true;
    }
    for row in 1..matrix.rows() {
        for col in 1..matrix.cols() {
            let pair = if matrix.horiz_symbol(col) == matrix.vert_symbol(row) {
                config.match_score
            } else {
                config.mismatch_penalty
            };
            let diag = matrix.cell(row - 1, col - 1).value + pair;
            let up = matrix.cell(row - 1, col).value + gap;
            let left = matrix.cell(row, col - 1).value + gap;
            let best = diag.max(up).max(left);
            let cell = matrix.cell_mut(row, col);
            cell.value = best;
            cell.from_diagonal = diag == best;
            cell.from_left = left == best;
            cell.from_up = up == best;
        }
    }
}

/// Walk a populated matrix from the bottom-right corner back to the origin,
/// reconstructing one optimal alignment as `(horizontal, vertical)` strings.
///
/// Ties are broken diagonal first, then left, then up. With a fixed scoring
/// scheme every choice in a tie leads to the same total score, so the order
/// is fixed purely for reproducibility. Output is built back-to-front and
/// reversed once at the end.
///
/// A non-origin cell with no predecessor flag set means population was
/// broken; that surfaces as [`AlignError::InconsistentMatrix`] rather than a
/// silently wrong alignment.
pub fn traceback(matrix: &ScoreMatrix) -> Result<(String, String), AlignError> {
    let mut row = matrix.rows() - 1;
    let mut col = matrix.cols() - 1;
    let mut horiz: Vec<char> = Vec::with_capacity(row + col);
    let mut vert: Vec<char> = Vec::with_capacity(row + col);
    while row > 0 || col > 0 {
        let cell = matrix.cell(row, col);
        if cell.from_diagonal {
            horiz.push(matrix.horiz_symbol(col));
            vert.push(matrix.vert_symbol(row));
            row -= 1;
            col -= 1;
        } else if cell.from_left {
            horiz.push(matrix.horiz_symbol(col));
            vert.push(GAP);
            col -= 1;
        } else if cell.from_up {
            horiz.push(GAP);
            vert.push(matrix.vert_symbol(row));
            row -= 1;
        } else {
            return Err(AlignError::InconsistentMatrix { row, col });
        }
    }
    horiz.reverse();
    vert.reverse();
    Ok((horiz.into_iter().collect(), vert.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rescore(align_a: &str, align_b: &str, cfg: &ScoringConfig) -> i32 {
        align_a
            .chars()
            .zip(align_b.chars())
            .map(|(x, y)| {
                if x == GAP || y == GAP {
                    cfg.gap_penalty
                } else if x == y {
                    cfg.match_score
                } else {
                    cfg.mismatch_penalty
                }
            })
            .sum()
    }

    fn strip_gaps(s: &str) -> String {
        s.chars().filter(|&c| c != GAP).collect()
    }

    #[test]
    fn identical_sequences() {
        let aln = align("ACGT", "ACGT", &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a, "ACGT");
        assert_eq!(aln.align_b, "ACGT");
        assert_eq!(aln.score, 16);
    }

    #[test]
    fn single_mismatch_no_gaps() {
        let aln = align("AC", "AG", &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a, "AC");
        assert_eq!(aln.align_b, "AG");
        assert_eq!(aln.score, 2);
    }

    #[test]
    fn empty_against_nonempty() {
        let aln = align("", "ACGT", &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a, "----");
        assert_eq!(aln.align_b, "ACGT");
        assert_eq!(aln.score, -8);
    }

    #[test]
    fn both_empty() {
        let aln = align("", "", &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a, "");
        assert_eq!(aln.align_b, "");
        assert_eq!(aln.score, 0);
    }

    #[test]
    fn internal_gap_preferred_over_mismatches() {
        let aln = align("GAT", "GT", &ScoringConfig::default()).unwrap();
        assert_eq!(aln.align_a, "GAT");
        assert_eq!(aln.align_b, "G-T");
        assert_eq!(aln.score, 6);
    }

    #[test]
    fn gap_strings_round_trip_and_match_length() {
        let cfg = ScoringConfig::default();
        for (a, b) in [
            ("GATTACA", "GCATGCU"),
            ("ACGTACGT", "ACG"),
            ("TTTT", "CCCC"),
            ("", "A"),
        ] {
            let aln = align(a, b, &cfg).unwrap();
            assert_eq!(aln.align_a.chars().count(), aln.align_b.chars().count());
            assert_eq!(strip_gaps(&aln.align_a), a);
            assert_eq!(strip_gaps(&aln.align_b), b);
        }
    }

    #[test]
    fn reported_score_matches_column_rescoring() {
        let cfg = ScoringConfig::default();
        for (a, b) in [("GATTACA", "GCATGCU"), ("AGGGCT", "AGGCA"), ("ACTG", "GTCA")] {
            let aln = align(a, b, &cfg).unwrap();
            assert_eq!(aln.score, rescore(&aln.align_a, &aln.align_b, &cfg));
        }
    }

    #[test]
    fn argument_order_only_swaps_roles() {
        let cfg = ScoringConfig::default();
        let fwd = align("ACGTACGT", "ACG", &cfg).unwrap();
        let rev = align("ACG", "ACGTACGT", &cfg).unwrap();
        assert_eq!(fwd.score, rev.score);
        assert_eq!(fwd.align_a, rev.align_b);
        assert_eq!(fwd.align_b, rev.align_a);
    }

    #[test]
    fn three_way_tie_resolves_to_diagonal() {
        // With match=1, mismatch=-2, gap=-1 the single cell of "A" vs "T"
        // scores -2 from all three predecessors; the diagonal must win.
        let cfg = ScoringConfig { match_score: 1, mismatch_penalty: -2, gap_penalty: -1 };
        for _ in 0..3 {
            let aln = align("A", "T", &cfg).unwrap();
            assert_eq!(aln.align_a, "A");
            assert_eq!(aln.align_b, "T");
            assert_eq!(aln.score, -2);
        }
    }

    #[test]
    fn ties_record_every_predecessor() {
        let cfg = ScoringConfig { match_score: 1, mismatch_penalty: -2, gap_penalty: -1 };
        let mut matrix = ScoreMatrix::new("A", "T");
        populate(&mut matrix, &cfg);
        let cell = matrix.cell(1, 1);
        assert_eq!(cell.value, -2);
        assert!(cell.from_diagonal && cell.from_left && cell.from_up);
    }

    #[test]
    fn traceback_rejects_unpopulated_matrix() {
        // A fresh matrix has no flags anywhere, so the very first step must
        // report the inconsistency instead of walking off.
        let matrix = ScoreMatrix::new("AC", "AC");
        let err = traceback(&matrix).unwrap_err();
        assert!(matches!(err, AlignError::InconsistentMatrix { row: 2, col: 2 }));
    }
}
