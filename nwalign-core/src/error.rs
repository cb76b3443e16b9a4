//! Structured error types for the nwalign workspace.

use thiserror::Error;

/// Unified error type for all nwalign operations.
#[derive(Debug, Error)]
pub enum NwalignError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed FASTA, CSV, JSON or TOML input)
    #[error("parse error: {0}")]
    Parse(String),

    /// A residue outside the declared alphabet, or an unrecognized alphabet tag.
    #[error("invalid sequence {id:?} for {alphabet}: {reason}")]
    InvalidSequence {
        id: String,
        alphabet: String,
        reason: String,
    },

    /// Traceback reached a cell with no optimal incoming edge, or the matrix
    /// shape does not match the sequences it is traced against.
    #[error("score matrix inconsistent with inputs at cell ({row}, {col})")]
    InconsistentMatrixInput { row: usize, col: usize },

    /// Invalid input (bad arguments, ragged matrices, wrong record counts)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl NwalignError {
    /// Attach a path to an I/O error so the message names the file.
    pub fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        NwalignError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }
}

/// Convenience alias used throughout the nwalign workspace.
pub type Result<T> = std::result::Result<T, NwalignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sequence_names_id_and_alphabet() {
        let err = NwalignError::InvalidSequence {
            id: "bad".into(),
            alphabet: "DNA".into(),
            reason: "invalid byte 'X' at position 4".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"bad\""));
        assert!(msg.contains("DNA"));
        assert!(msg.contains("position 4"));
    }

    #[test]
    fn io_at_keeps_kind_and_path() {
        let err = NwalignError::io_at(
            std::path::Path::new("/tmp/missing.fa"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        match err {
            NwalignError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("/tmp/missing.fa"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
