//! Linear match/mismatch/gap scoring for global alignment.

/// Match, mismatch and per-position gap scores.
///
/// The values are unconstrained integers. Conventional use has
/// `gap <= 0` and `mismatch_score < match_score`, but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringParams {
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub match_score: i32,
    #[cfg_attr(feature = "serde", serde(rename = "mismatch"))]
    pub mismatch_score: i32,
    pub gap: i32,
}

impl ScoringParams {
    /// Create a scoring scheme from explicit values.
    pub fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// Score an aligned residue pair by exact byte equality.
    ///
    /// Residues are expected in normalized (uppercase) form.
    #[inline]
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl Default for ScoringParams {
    /// +1 match, -1 mismatch, -2 gap.
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap: -2,
        }
    }
}
