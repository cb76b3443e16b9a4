//! Core types for global alignment results.

use core::fmt;

use nwalign_core::{NwalignError, Result};

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;

/// Symbol used for a gap in aligned strings.
pub const GAP: u8 = b'-';

/// A single CIGAR operation describing how aligned sequences relate.
///
/// The first sequence plays the query role: a residue of the first sequence
/// against a gap is a `Deletion`, a gap against a residue of the second
/// sequence is an `Insertion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CigarOp {
    /// Matching residues. SAM op `=`.
    Match(usize),
    /// Mismatching residues. SAM op `X`.
    Mismatch(usize),
    /// Gap in the first sequence. SAM op `I`.
    Insertion(usize),
    /// Gap in the second sequence. SAM op `D`.
    Deletion(usize),
}

impl CigarOp {
    /// Single-character SAM CIGAR code.
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => '=',
            CigarOp::Mismatch(_) => 'X',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    /// Number of columns covered by this operation.
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n,
        }
    }

    /// Whether this operation has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn extended(self) -> Self {
        match self {
            CigarOp::Match(n) => CigarOp::Match(n + 1),
            CigarOp::Mismatch(n) => CigarOp::Mismatch(n + 1),
            CigarOp::Insertion(n) => CigarOp::Insertion(n + 1),
            CigarOp::Deletion(n) => CigarOp::Deletion(n + 1),
        }
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// Two equal-length aligned strings over residues plus `-`.
///
/// No column is a gap in both strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignedPair {
    aligned1: String,
    aligned2: String,
}

impl AlignedPair {
    /// Build a pair from two aligned strings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the strings differ in length or share a
    /// gap column.
    pub fn new(aligned1: impl Into<String>, aligned2: impl Into<String>) -> Result<Self> {
        let pair = Self {
            aligned1: aligned1.into(),
            aligned2: aligned2.into(),
        };
        if pair.aligned1.len() != pair.aligned2.len() {
            return Err(NwalignError::InvalidInput(format!(
                "aligned strings differ in length ({} vs {})",
                pair.aligned1.len(),
                pair.aligned2.len()
            )));
        }
        if let Some(k) = pair.columns().position(|(a, b)| a == GAP && b == GAP) {
            return Err(NwalignError::InvalidInput(format!(
                "column {k} is a gap in both aligned strings"
            )));
        }
        Ok(pair)
    }

    /// Build from column bytes already in left-to-right order.
    pub(crate) fn from_columns(columns: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let (aligned1, aligned2) = columns
            .into_iter()
            .map(|(a, b)| (a as char, b as char))
            .unzip();
        Self { aligned1, aligned2 }
    }

    /// Aligned form of the first sequence.
    pub fn aligned1(&self) -> &str {
        &self.aligned1
    }

    /// Aligned form of the second sequence.
    pub fn aligned2(&self) -> &str {
        &self.aligned2
    }

    /// Iterate aligned columns as byte pairs.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned1.bytes().zip(self.aligned2.bytes())
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    /// Columns with identical non-gap residues.
    pub fn matches(&self) -> usize {
        self.columns().filter(|&(a, b)| a == b && a != GAP).count()
    }

    /// Columns with two different residues.
    pub fn mismatches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != b && a != GAP && b != GAP)
            .count()
    }

    /// Gap characters across both strings.
    pub fn gaps(&self) -> usize {
        self.columns()
            .map(|(a, b)| usize::from(a == GAP) + usize::from(b == GAP))
            .sum()
    }

    /// Percentage of columns that are matches, in `[0.0, 100.0]`.
    ///
    /// Returns 0.0 if the alignment is empty.
    pub fn identity_pct(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64 * 100.0
    }

    /// Sum of per-column scores under `params`.
    pub fn score(&self, params: &ScoringParams) -> i64 {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    i64::from(params.gap)
                } else {
                    i64::from(params.score_pair(a, b))
                }
            })
            .sum()
    }

    /// Run-length encoded CIGAR operations.
    pub fn cigar(&self) -> Vec<CigarOp> {
        let mut ops: Vec<CigarOp> = Vec::new();
        for (a, b) in self.columns() {
            let op = match (a, b) {
                (GAP, _) => CigarOp::Insertion(1),
                (_, GAP) => CigarOp::Deletion(1),
                _ if a == b => CigarOp::Match(1),
                _ => CigarOp::Mismatch(1),
            };
            match ops.last_mut() {
                Some(last) if std::mem::discriminant(last) == std::mem::discriminant(&op) => {
                    *last = last.extended();
                }
                _ => ops.push(op),
            }
        }
        ops
    }

    /// Format the CIGAR as a compact string, e.g. `"4=1I3="`.
    pub fn cigar_string(&self) -> String {
        self.cigar().iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.aligned1, self.aligned2)
    }
}

/// A completed global alignment: the matrix, its score, and one or more
/// optimal aligned pairs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlobalAlignment {
    pub score: i64,
    pub matrix: ScoreMatrix,
    pub alignments: Vec<AlignedPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unequal_lengths() {
        assert!(AlignedPair::new("AC", "A").is_err());
    }

    #[test]
    fn rejects_double_gap_column() {
        assert!(AlignedPair::new("A-", "C-").is_err());
    }

    #[test]
    fn statistics_for_mixed_alignment() {
        let pair = AlignedPair::new("ACG-T", "A-GCA").unwrap();
        assert_eq!(pair.len(), 5);
        assert_eq!(pair.matches(), 2);
        assert_eq!(pair.mismatches(), 1);
        assert_eq!(pair.gaps(), 2);
        assert!((pair.identity_pct() - 40.0).abs() < 1e-9);
        assert_eq!(pair.cigar_string(), "1=1D1=1I1X");
    }

    #[test]
    fn empty_pair_has_zero_identity() {
        let pair = AlignedPair::new("", "").unwrap();
        assert!(pair.is_empty());
        assert_eq!(pair.identity_pct(), 0.0);
        assert_eq!(pair.cigar_string(), "");
    }

    #[test]
    fn all_mismatch_pair() {
        let pair = AlignedPair::new("GA", "AG").unwrap();
        assert_eq!(pair.matches(), 0);
        assert_eq!(pair.gaps(), 0);
        assert_eq!(pair.identity_pct(), 0.0);
        assert_eq!(pair.score(&ScoringParams::new(1, -1, -1)), -2);
    }

    #[test]
    fn cigar_runs_are_merged() {
        let pair = AlignedPair::new("AAAA--CC", "AAAAGGCT").unwrap();
        assert_eq!(
            pair.cigar(),
            vec![CigarOp::Match(4), CigarOp::Insertion(2), CigarOp::Match(1), CigarOp::Mismatch(1)]
        );
    }

    #[test]
    fn score_counts_gaps() {
        let pair = AlignedPair::new("AG", "A-").unwrap();
        assert_eq!(pair.score(&ScoringParams::new(1, -1, -1)), 0);
    }

    #[test]
    fn score_does_not_wrap_for_large_penalties() {
        let pair = AlignedPair::new("A--", "ACG").unwrap();
        let p = ScoringParams::new(i32::MAX, -1, i32::MIN);
        assert_eq!(pair.score(&p), i64::from(i32::MAX) + 2 * i64::from(i32::MIN));
    }

    #[test]
    fn accessors_expose_validated_strings() {
        let pair = AlignedPair::new("AC-", "A-G").unwrap();
        assert_eq!(pair.aligned1(), "AC-");
        assert_eq!(pair.aligned2(), "A-G");
    }

    #[test]
    fn display_is_two_lines() {
        let pair = AlignedPair::new("AG", "A-").unwrap();
        assert_eq!(pair.to_string(), "AG\nA-");
    }
}
