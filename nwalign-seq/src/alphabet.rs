//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type.
//! [`AlphabetKind`] is the runtime tag a [`Sequence`](crate::Sequence)
//! carries and dispatches to the marker types.

use std::fmt;
use std::str::FromStr;

use nwalign_core::{NwalignError, Result};

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// Unambiguous DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// Protein alphabet: the 20 standard one-letter amino acid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}

/// Runtime alphabet tag carried by every sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlphabetKind {
    #[default]
    Dna,
    Protein,
}

impl AlphabetKind {
    /// Human-readable name of the underlying alphabet.
    pub fn name(self) -> &'static str {
        match self {
            AlphabetKind::Dna => DnaAlphabet::NAME,
            AlphabetKind::Protein => ProteinAlphabet::NAME,
        }
    }

    /// Check whether an uppercase byte belongs to this alphabet.
    pub fn is_valid(self, b: u8) -> bool {
        match self {
            AlphabetKind::Dna => DnaAlphabet::is_valid(b),
            AlphabetKind::Protein => ProteinAlphabet::is_valid(b),
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetKind {
    type Err = NwalignError;

    /// Parse `"dna"` or `"protein"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dna" => Ok(AlphabetKind::Dna),
            "protein" => Ok(AlphabetKind::Protein),
            _ => Err(NwalignError::InvalidSequence {
                id: String::new(),
                alphabet: s.to_string(),
                reason: "unknown alphabet".into(),
            }),
        }
    }
}
