//! Score matrix data model for global alignment.
//!
//! The matrix owns a `(shorter+1) x (longer+1)` grid of [`Cell`]s plus the
//! two sequences, with the longer sequence always bound to the horizontal
//! axis. That orientation is purely a layout normalization; the matrix
//! remembers whether the caller's argument order was swapped so results can
//! be handed back in the original order.

/// One entry of the score matrix.
///
/// `value` is the optimal score of the prefixes ending at this cell. The
/// three flags record **every** predecessor that achieves that value; ties
/// are preserved here and resolved only during traceback.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    /// Optimal alignment score of the prefixes ending at this cell.
    pub value: i32,
    /// The diagonal predecessor achieves `value` (match or mismatch).
    pub from_diagonal: bool,
    /// The left predecessor achieves `value` (gap on the vertical axis).
    pub from_left: bool,
    /// The upper predecessor achieves `value` (gap on the horizontal axis).
    pub from_up: bool,
}

/// The Needleman-Wunsch score matrix for one pair of sequences.
///
/// Row 0 and column 0 represent the "no symbol consumed" boundary, so the
/// grid is `(vert_len+1)` rows by `(horiz_len+1)` columns. Each alignment
/// request allocates its own matrix; nothing is shared between requests.
#[derive(Clone, Debug)]
pub struct ScoreMatrix {
    horiz: Vec<char>,
    vert: Vec<char>,
    swapped: bool,
    cells: Vec<Vec<Cell>>,
}

impl ScoreMatrix {
    /// Build a zeroed matrix for `seq_a` and `seq_b`.
    ///
    /// The longer sequence goes on the horizontal axis (ties keep `seq_a`
    /// there); [`ScoreMatrix::swapped`] reports whether the axes ended up
    /// reversed relative to the argument order. Empty sequences are fine and
    /// yield a single-row or single-column matrix.
    pub fn new(seq_a: &str, seq_b: &str) -> Self {
        let a: Vec<char> = seq_a.chars().collect();
        let b: Vec<char> = seq_b.chars().collect();
        let (horiz, vert, swapped) = if a.len() >= b.len() { (a, b, false) } else { (b, a, true) };
        let cells = vec![vec![Cell::default(); horiz.len() + 1]; vert.len() + 1];
        Self { horiz, vert, swapped, cells }
    }

    /// Number of rows, including the boundary row 0.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, including the boundary column 0.
    pub fn cols(&self) -> usize {
        self.horiz.len() + 1
    }

    /// Symbol of the horizontal-axis sequence consumed by column `col`.
    pub fn horiz_symbol(&self, col: usize) -> char {
        self.horiz[col - 1]
    }

    /// Symbol of the vertical-axis sequence consumed by row `row`.
    pub fn vert_symbol(&self, row: usize) -> char {
        self.vert[row - 1]
    }

    /// True if the caller's second sequence landed on the horizontal axis.
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Read a cell at `[row][col]`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Mutable access to a cell at `[row][col]`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row][col]
    }
}
