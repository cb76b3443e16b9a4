//! Alignment reports: a serializable summary document and its plain-text
//! rendering.

use std::fmt;
use std::fs;
use std::path::Path;

use nwalign_align::{AlignedPair, GlobalAlignment, ScoringParams};
use nwalign_core::{NwalignError, Result};
use nwalign_seq::Sequence;
use serde::Serialize;

/// Derived statistics for one aligned pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentSummary {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub length: usize,
    pub matches: usize,
    pub identity_pct: f64,
    pub gaps: usize,
    pub cigar: String,
}

impl From<&AlignedPair> for AlignmentSummary {
    fn from(pair: &AlignedPair) -> Self {
        Self {
            aligned_seq1: pair.aligned1().to_string(),
            aligned_seq2: pair.aligned2().to_string(),
            length: pair.len(),
            matches: pair.matches(),
            identity_pct: pair.identity_pct(),
            gaps: pair.gaps(),
            cigar: pair.cigar_string(),
        }
    }
}

/// Everything a downstream formatter needs about one alignment run.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub parameters: ScoringParams,
    pub sequences: [Sequence; 2],
    pub score: i64,
    pub score_matrix: Vec<Vec<i64>>,
    pub alignments: Vec<AlignmentSummary>,
}

impl AlignmentReport {
    /// Assemble a report from the inputs and result of an alignment.
    pub fn new(
        seq1: &Sequence,
        seq2: &Sequence,
        params: &ScoringParams,
        result: &GlobalAlignment,
    ) -> Self {
        Self {
            parameters: *params,
            sequences: [seq1.clone(), seq2.clone()],
            score: result.score,
            score_matrix: result.matrix.to_rows(),
            alignments: result.alignments.iter().map(AlignmentSummary::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NwalignError::Parse(e.to_string()))
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| NwalignError::io_at(path, e))
    }

    /// Plain-text rendering, see [`format_report`].
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Needleman-Wunsch Global Alignment")?;
        writeln!(f, "=================================")?;
        writeln!(f)?;
        writeln!(f, "Parameters")?;
        writeln!(f, "  Match score: {}", self.parameters.match_score)?;
        writeln!(f, "  Mismatch score: {}", self.parameters.mismatch_score)?;
        writeln!(f, "  Gap penalty: {}", self.parameters.gap)?;
        writeln!(f)?;
        writeln!(f, "Sequences")?;
        for seq in &self.sequences {
            writeln!(f, "  {}: {}", seq.id(), seq)?;
        }
        writeln!(f)?;
        writeln!(f, "Optimal score: {}", self.score)?;

        for (k, aln) in self.alignments.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Alignment {}", k + 1)?;
            writeln!(f, "  {}", aln.aligned_seq1)?;
            writeln!(f, "  {}", aln.aligned_seq2)?;
            writeln!(f, "  Alignment length: {}", aln.length)?;
            writeln!(
                f,
                "  Identical positions: {} ({:.2}%)",
                aln.matches, aln.identity_pct
            )?;
            writeln!(f, "  Total gaps: {}", aln.gaps)?;
            writeln!(f, "  CIGAR: {}", aln.cigar)?;
        }
        Ok(())
    }
}

/// Render the plain-text report for an alignment run.
pub fn format_report(
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoringParams,
    result: &GlobalAlignment,
) -> String {
    AlignmentReport::new(seq1, seq2, params, result).to_text()
}

/// Write report text to `path` verbatim.
pub fn write_report(path: impl AsRef<Path>, report: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report).map_err(|e| NwalignError::io_at(path, e))?;
    log::info!("wrote report to {}", path.display());
    Ok(())
}
