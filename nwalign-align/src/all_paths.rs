//! Enumeration of every co-optimal global alignment, up to a cap.
//!
//! Depth-first over the matrix from the bottom-right cell to the origin,
//! following every optimal incoming edge in diagonal, up, left order. Partial
//! paths share prefixes through an arena of `(parent, column)` nodes, so a
//! branch costs one node instead of a copy of the path so far, and depth is
//! bounded by heap memory rather than the call stack.

use nwalign_core::{NwalignError, Result};
use nwalign_seq::Sequence;

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;
use crate::traceback::{Step, Tracer};
use crate::types::AlignedPair;

/// Default cap on the number of enumerated alignments.
pub const DEFAULT_MAX_PATHS: usize = 100;

/// One emitted column, linked toward the bottom-right cell.
struct Node {
    parent: Option<usize>,
    column: (u8, u8),
}

/// Enumerate optimal alignments through `matrix`, at most `max_paths` of them.
///
/// Results come in depth-first order with diagonal explored before up and up
/// before left, so the first entry is always the [`traceback`](crate::traceback)
/// result. The cap is checked each time a path completes; exploration stops as
/// soon as `max_paths` alignments are collected. `max_paths == 0` returns an
/// empty list.
///
/// # Errors
///
/// Returns `InconsistentMatrixInput` if the matrix shape does not match the
/// sequences, or if an explored cell has no optimal incoming edge.
pub fn trace_all_paths(
    matrix: &ScoreMatrix,
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoringParams,
    max_paths: usize,
) -> Result<Vec<AlignedPair>> {
    let tracer = Tracer::new(matrix, seq1, seq2, params)?;
    let mut paths = Vec::new();
    if max_paths == 0 {
        return Ok(paths);
    }

    let mut arena: Vec<Node> = Vec::new();
    // (i, j, last emitted node)
    let (n, m) = tracer.end();
    let mut stack: Vec<(usize, usize, Option<usize>)> = vec![(n, m, None)];

    while let Some((i, j, tip)) = stack.pop() {
        if i == 0 && j == 0 {
            paths.push(collect(&arena, tip));
            log::trace!("optimal path {} complete", paths.len());
            if paths.len() >= max_paths {
                if !stack.is_empty() {
                    log::debug!("stopped enumeration at max_paths = {}", max_paths);
                }
                break;
            }
            continue;
        }

        let before = stack.len();
        // Reverse priority so the diagonal branch is popped first.
        for step in Step::PRIORITY.into_iter().rev() {
            if tracer.is_optimal(step, i, j) {
                arena.push(Node {
                    parent: tip,
                    column: tracer.column(step, i, j),
                });
                let (si, sj) = step.source(i, j);
                stack.push((si, sj, Some(arena.len() - 1)));
            }
        }
        if stack.len() == before {
            return Err(NwalignError::InconsistentMatrixInput { row: i, col: j });
        }
    }

    log::debug!(
        "enumerated {} optimal alignment(s) for {} vs {}",
        paths.len(),
        seq1.id(),
        seq2.id()
    );
    Ok(paths)
}

/// Walk from the column nearest the origin back to the bottom-right cell,
/// which is already left-to-right alignment order.
fn collect(arena: &[Node], tip: Option<usize>) -> AlignedPair {
    let mut columns = Vec::new();
    let mut cursor = tip;
    while let Some(idx) = cursor {
        columns.push(arena[idx].column);
        cursor = arena[idx].parent;
    }
    AlignedPair::from_columns(columns)
}
