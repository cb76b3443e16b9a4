//! Needleman-Wunsch score matrix with a linear gap penalty.
//!
//! Cell `(i, j)` holds the optimal score of aligning the first `i` residues of
//! the first sequence against the first `j` residues of the second:
//!
//! - `H[0][0] = 0`, `H[i][0] = i * gap`, `H[0][j] = j * gap`
//! - `H[i][j] = max(H[i-1][j-1] + s(a_i, b_j), H[i-1][j] + gap, H[i][j-1] + gap)`
//!
//! Scoring parameters are `i32`; cells are widened to `i64`.

use std::ops::Index;

use nwalign_core::{NwalignError, Result};
use nwalign_seq::Sequence;

use crate::scoring::ScoringParams;

/// Dense row-major DP table of `(len1 + 1) x (len2 + 1)` scores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

impl ScoreMatrix {
    /// Fill the matrix for `seq1` (rows) against `seq2` (columns).
    ///
    /// Never fails; empty sequences yield a single row or column of
    /// cumulative gap penalties, or a 1x1 zero matrix when both are empty.
    pub fn build(seq1: &Sequence, seq2: &Sequence, params: &ScoringParams) -> Self {
        let a = seq1.residues();
        let b = seq2.residues();
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0i64; rows * cols];
        let gap = i64::from(params.gap);

        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        for i in 1..rows {
            cells[idx(i, 0)] = cells[idx(i - 1, 0)] + gap;
        }
        for j in 1..cols {
            cells[idx(0, j)] = cells[idx(0, j - 1)] + gap;
        }

        for i in 1..rows {
            for j in 1..cols {
                let diag =
                    cells[idx(i - 1, j - 1)] + i64::from(params.score_pair(a[i - 1], b[j - 1]));
                let up = cells[idx(i - 1, j)] + gap;
                let left = cells[idx(i, j - 1)] + gap;
                cells[idx(i, j)] = diag.max(up).max(left);
            }
        }

        log::debug!(
            "built {}x{} score matrix for {} vs {}, score {}",
            rows,
            cols,
            seq1.id(),
            seq2.id(),
            cells[rows * cols - 1]
        );

        Self { rows, cols, cells }
    }

    /// Wrap caller-supplied rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there are no rows, a row is empty, or rows
    /// differ in length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(NwalignError::InvalidInput(
                "score matrix must have at least one row and one column".into(),
            ));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(NwalignError::InvalidInput(format!(
                "score matrix row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let n = rows.len();
        Ok(Self {
            rows: n,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (`len(seq1) + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(seq2) + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Score at cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// The optimal global alignment score (bottom-right cell).
    pub fn score(&self) -> i64 {
        self.cells[self.cells.len() - 1]
    }

    /// One row of the matrix.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.cols)
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.iter_rows().map(<[i64]>::to_vec).collect()
    }

    /// Fail unless the shape matches `(len1 + 1) x (len2 + 1)`.
    pub(crate) fn check_shape(&self, len1: usize, len2: usize) -> Result<()> {
        if self.rows != len1 + 1 || self.cols != len2 + 1 {
            return Err(NwalignError::InconsistentMatrixInput {
                row: self.rows.min(len1 + 1),
                col: self.cols.min(len2 + 1),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        &self.cells[i * self.cols + j]
    }
}
