//! Single-path traceback through a filled score matrix.
//!
//! Walks from the bottom-right cell to the origin, taking the first optimal
//! incoming edge in the fixed priority order diagonal, up, left.

use nwalign_core::{NwalignError, Result};
use nwalign_seq::Sequence;

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;
use crate::types::{AlignedPair, GAP};

/// An incoming edge into a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// From `(i-1, j-1)`: residue against residue.
    Diagonal,
    /// From `(i-1, j)`: residue of the first sequence against a gap.
    Up,
    /// From `(i, j-1)`: gap against a residue of the second sequence.
    Left,
}

impl Step {
    /// Tie-break order shared by both traceback strategies.
    pub(crate) const PRIORITY: [Step; 3] = [Step::Diagonal, Step::Up, Step::Left];

    /// The cell this edge comes from.
    pub(crate) fn source(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Step::Diagonal => (i - 1, j - 1),
            Step::Up => (i - 1, j),
            Step::Left => (i, j - 1),
        }
    }
}

/// Read-only view over a matrix and the inputs it was built from.
pub(crate) struct Tracer<'a> {
    matrix: &'a ScoreMatrix,
    a: &'a [u8],
    b: &'a [u8],
    params: &'a ScoringParams,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(
        matrix: &'a ScoreMatrix,
        seq1: &'a Sequence,
        seq2: &'a Sequence,
        params: &'a ScoringParams,
    ) -> Result<Self> {
        matrix.check_shape(seq1.len(), seq2.len())?;
        Ok(Self {
            matrix,
            a: seq1.residues(),
            b: seq2.residues(),
            params,
        })
    }

    /// Bottom-right cell.
    pub(crate) fn end(&self) -> (usize, usize) {
        (self.a.len(), self.b.len())
    }

    /// Whether `step` into `(i, j)` reproduces the recorded score.
    pub(crate) fn is_optimal(&self, step: Step, i: usize, j: usize) -> bool {
        let cell = self.matrix.get(i, j);
        let gap = i64::from(self.params.gap);
        match step {
            Step::Diagonal => {
                i > 0
                    && j > 0
                    && cell
                        == self.matrix.get(i - 1, j - 1)
                            + i64::from(self.params.score_pair(self.a[i - 1], self.b[j - 1]))
            }
            Step::Up => i > 0 && cell == self.matrix.get(i - 1, j) + gap,
            Step::Left => j > 0 && cell == self.matrix.get(i, j - 1) + gap,
        }
    }

    /// The aligned column emitted by taking `step` into `(i, j)`.
    pub(crate) fn column(&self, step: Step, i: usize, j: usize) -> (u8, u8) {
        match step {
            Step::Diagonal => (self.a[i - 1], self.b[j - 1]),
            Step::Up => (self.a[i - 1], GAP),
            Step::Left => (GAP, self.b[j - 1]),
        }
    }
}

/// Reconstruct one optimal global alignment from `matrix`.
///
/// `matrix` must have been built from the same sequences and parameters.
/// When several edges are optimal, diagonal wins over up, and up over left.
///
/// # Errors
///
/// Returns `InconsistentMatrixInput` if the matrix shape does not match the
/// sequences, or if a cell on the path has no optimal incoming edge.
pub fn traceback(
    matrix: &ScoreMatrix,
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoringParams,
) -> Result<AlignedPair> {
    let tracer = Tracer::new(matrix, seq1, seq2, params)?;
    let (mut i, mut j) = tracer.end();
    let mut columns = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let step = Step::PRIORITY
            .into_iter()
            .find(|&s| tracer.is_optimal(s, i, j))
            .ok_or(NwalignError::InconsistentMatrixInput { row: i, col: j })?;
        columns.push(tracer.column(step, i, j));
        (i, j) = step.source(i, j);
    }

    columns.reverse();
    Ok(AlignedPair::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwalign_seq::AlphabetKind;

    fn dna(id: &str, s: &str) -> Sequence {
        Sequence::new(id, s, AlphabetKind::Dna).unwrap()
    }

    fn run(a: &str, b: &str, p: ScoringParams) -> AlignedPair {
        let (s1, s2) = (dna("s1", a), dna("s2", b));
        let m = ScoreMatrix::build(&s1, &s2, &p);
        traceback(&m, &s1, &s2, &p).unwrap()
    }

    #[test]
    fn single_match() {
        let pair = run("A", "A", ScoringParams::new(1, -1, -1));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("A", "A"));
    }

    #[test]
    fn residue_against_empty() {
        let pair = run("A", "", ScoringParams::new(1, -1, -2));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("A", "-"));
    }

    #[test]
    fn empty_against_residues() {
        let pair = run("", "AC", ScoringParams::new(1, -1, -2));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("--", "AC"));
    }

    #[test]
    fn both_empty() {
        let pair = run("", "", ScoringParams::default());
        assert!(pair.is_empty());
    }

    #[test]
    fn diagonal_mismatches_preferred_over_two_gaps() {
        let pair = run("GA", "AG", ScoringParams::new(1, -1, -2));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("GA", "AG"));
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.matches(), 0);
        assert_eq!(pair.identity_pct(), 0.0);
        assert_eq!(pair.gaps(), 0);
    }

    #[test]
    fn up_preferred_over_left_on_tie() {
        // GA/AG with gap -1: (2,2) ties between up and left, up wins
        let pair = run("GA", "AG", ScoringParams::new(1, -1, -1));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("-GA", "AG-"));
    }

    #[test]
    fn diagonal_preferred_over_up() {
        // AA/A: (2, 1) ties between diagonal and up
        let pair = run("AA", "A", ScoringParams::new(1, -1, -1));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("AA", "-A"));
    }

    #[test]
    fn trailing_gap() {
        let pair = run("AG", "A", ScoringParams::new(1, -1, -1));
        assert_eq!((pair.aligned1(), pair.aligned2()), ("AG", "A-"));
    }

    #[test]
    fn traced_score_matches_matrix() {
        let p = ScoringParams::new(2, -1, -2);
        let (s1, s2) = (dna("s1", "GATTACA"), dna("s2", "GCATGCT"));
        let m = ScoreMatrix::build(&s1, &s2, &p);
        let pair = traceback(&m, &s1, &s2, &p).unwrap();
        assert_eq!(pair.score(&p), m.score());
        assert_eq!(pair.aligned1().replace('-', ""), "GATTACA");
        assert_eq!(pair.aligned2().replace('-', ""), "GCATGCT");
    }

    #[test]
    fn extreme_parameters_trace_cleanly() {
        let p = ScoringParams::new(i32::MAX, i32::MIN, i32::MIN / 2);
        let (s1, s2) = (dna("s1", "GATTACA"), dna("s2", "GATCA"));
        let m = ScoreMatrix::build(&s1, &s2, &p);
        let pair = traceback(&m, &s1, &s2, &p).unwrap();
        assert_eq!(pair.score(&p), m.score());
        assert_eq!(pair.matches(), 5);
    }

    #[test]
    fn shape_mismatch_is_inconsistent() {
        let p = ScoringParams::default();
        let m = ScoreMatrix::build(&dna("x", "AC"), &dna("y", "A"), &p);
        let err = traceback(&m, &dna("x", "A"), &dna("y", "A"), &p).unwrap_err();
        assert!(matches!(err, NwalignError::InconsistentMatrixInput { .. }));
    }

    #[test]
    fn tampered_cell_is_inconsistent() {
        let p = ScoringParams::new(1, -1, -1);
        let m = ScoreMatrix::from_rows(vec![vec![0, -1], vec![-1, 7]]).unwrap();
        let err = traceback(&m, &dna("x", "A"), &dna("y", "A"), &p).unwrap_err();
        match err {
            NwalignError::InconsistentMatrixInput { row, col } => assert_eq!((row, col), (1, 1)),
            other => panic!("expected InconsistentMatrixInput, got {other:?}"),
        }
    }

    #[test]
    fn wrong_parameters_are_detected() {
        let (s1, s2) = (dna("x", "ACGT"), dna("y", "AGT"));
        let m = ScoreMatrix::build(&s1, &s2, &ScoringParams::new(1, -1, -1));
        let err = traceback(&m, &s1, &s2, &ScoringParams::new(5, -3, -4)).unwrap_err();
        assert!(matches!(err, NwalignError::InconsistentMatrixInput { .. }));
    }
}
