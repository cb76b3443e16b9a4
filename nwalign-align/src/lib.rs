//! Needleman-Wunsch global alignment for the nwalign workspace.
//!
//! Builds the full linear-gap score matrix for two [`Sequence`]s, then
//! reconstructs either one optimal alignment ([`traceback`]) or every
//! co-optimal alignment up to a cap ([`trace_all_paths`]).
//!
//! # Quick start
//!
//! ```
//! use nwalign_align::{align, ScoringParams};
//! use nwalign_seq::{AlphabetKind, Sequence};
//!
//! let s1 = Sequence::new("s1", "GATTACA", AlphabetKind::Dna).unwrap();
//! let s2 = Sequence::new("s2", "GATCA", AlphabetKind::Dna).unwrap();
//! let result = align(&s1, &s2, &ScoringParams::new(1, -1, -1)).unwrap();
//! assert_eq!(result.score, 3);
//! assert_eq!(result.alignments.len(), 1);
//! ```

pub mod all_paths;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod types;

pub use all_paths::{trace_all_paths, DEFAULT_MAX_PATHS};
pub use matrix::ScoreMatrix;
pub use scoring::ScoringParams;
pub use traceback::traceback;
pub use types::{AlignedPair, CigarOp, GlobalAlignment, GAP};

use nwalign_core::Result;
use nwalign_seq::Sequence;

/// Convenience function: build the matrix and trace one optimal alignment.
pub fn align(seq1: &Sequence, seq2: &Sequence, params: &ScoringParams) -> Result<GlobalAlignment> {
    let matrix = ScoreMatrix::build(seq1, seq2, params);
    let alignment = traceback(&matrix, seq1, seq2, params)?;
    Ok(GlobalAlignment {
        score: matrix.score(),
        matrix,
        alignments: vec![alignment],
    })
}

/// Convenience function: build the matrix and enumerate up to `max_paths`
/// optimal alignments.
pub fn align_all(
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoringParams,
    max_paths: usize,
) -> Result<GlobalAlignment> {
    let matrix = ScoreMatrix::build(seq1, seq2, params);
    let alignments = trace_all_paths(&matrix, seq1, seq2, params, max_paths)?;
    Ok(GlobalAlignment {
        score: matrix.score(),
        matrix,
        alignments,
    })
}
