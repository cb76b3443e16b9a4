//! Validated, identified sequence type.
//!
//! [`Sequence`] owns an identifier, an uppercase residue buffer and the
//! [`AlphabetKind`] it was validated against. Construction uppercases and
//! validates every byte; the value is immutable afterwards.

use std::fmt;

use nwalign_core::{NwalignError, Result, Summarizable};

use crate::alphabet::AlphabetKind;

/// A validated biological sequence with an identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sequence {
    id: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "ser_residues"))]
    residues: Vec<u8>,
    alphabet: AlphabetKind,
}

impl Sequence {
    /// Create a new validated sequence.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// Empty residue strings are accepted.
    pub fn new(
        id: impl Into<String>,
        residues: impl AsRef<[u8]>,
        alphabet: AlphabetKind,
    ) -> Result<Self> {
        let id = id.into();
        let data: Vec<u8> = residues
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if let Some(i) = data.iter().position(|&b| !alphabet.is_valid(b)) {
            let b = data[i];
            return Err(NwalignError::InvalidSequence {
                id,
                alphabet: alphabet.name().to_string(),
                reason: format!("invalid byte '{}' (0x{:02X}) at position {}", b as char, b, i),
            });
        }
        Ok(Self {
            id,
            residues: data,
            alphabet,
        })
    }

    /// Create a sequence from a textual alphabet tag such as `"dna"`.
    ///
    /// An unrecognized tag is reported as an invalid sequence carrying `id`.
    pub fn with_tag(id: impl Into<String>, residues: impl AsRef<[u8]>, tag: &str) -> Result<Self> {
        let id = id.into();
        let alphabet = match tag.parse::<AlphabetKind>() {
            Ok(kind) => kind,
            Err(NwalignError::InvalidSequence { alphabet, reason, .. }) => {
                return Err(NwalignError::InvalidSequence {
                    id,
                    alphabet,
                    reason,
                })
            }
            Err(other) => return Err(other),
        };
        Self::new(id, residues, alphabet)
    }

    /// The sequence identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Uppercase residue bytes.
    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// Residues as a string slice.
    pub fn as_str(&self) -> &str {
        // Validated residues are a subset of ASCII.
        std::str::from_utf8(&self.residues).unwrap_or_default()
    }

    /// The alphabet the residues were validated against.
    pub fn alphabet(&self) -> AlphabetKind {
        self.alphabet
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether there are no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[cfg(feature = "serde")]
fn ser_residues<S: serde::Serializer>(
    residues: &[u8],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let s = std::str::from_utf8(residues).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(s)
}

impl Summarizable for Sequence {
    fn summary(&self) -> String {
        let preview_len = self.residues.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.residues.len() > 20 {
            format!("{} {} ({} residues): {}...", self.alphabet, self.id, self.len(), preview)
        } else {
            format!("{} {} ({} residues): {}", self.alphabet, self.id, self.len(), preview)
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, \"{}\")", self.alphabet, self.id, self.as_str())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dna_sequence() {
        let seq = Sequence::new("seq1", "ACGTACGT", AlphabetKind::Dna).unwrap();
        assert_eq!(seq.id(), "seq1");
        assert_eq!(seq.as_str(), "ACGTACGT");
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.alphabet(), AlphabetKind::Dna);
    }

    #[test]
    fn lowercase_is_normalized() {
        let seq = Sequence::new("s", "acgt", AlphabetKind::Dna).unwrap();
        assert_eq!(seq.residues(), b"ACGT");
    }

    #[test]
    fn invalid_dna_sequence_errors() {
        let err = Sequence::new("bad", "ACGTX", AlphabetKind::Dna).unwrap_err();
        match err {
            NwalignError::InvalidSequence { id, alphabet, reason } => {
                assert_eq!(id, "bad");
                assert_eq!(alphabet, "DNA");
                assert!(reason.contains("position 4"), "{reason}");
            }
            other => panic!("expected InvalidSequence, got {other:?}"),
        }
    }

    #[test]
    fn valid_protein_sequence() {
        let prot = Sequence::new("prot1", "ARNDCEQGHI", AlphabetKind::Protein).unwrap();
        assert_eq!(prot.len(), 10);
    }

    #[test]
    fn invalid_protein_sequence_errors() {
        assert!(Sequence::new("badprot", "ARNDXE", AlphabetKind::Protein).is_err());
    }

    #[test]
    fn empty_sequence_is_allowed() {
        let seq = Sequence::new("empty", "", AlphabetKind::Dna).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.as_str(), "");
    }

    #[test]
    fn unknown_tag_carries_id() {
        let err = Sequence::with_tag("foo", "ACGT", "rna").unwrap_err();
        match err {
            NwalignError::InvalidSequence { id, alphabet, .. } => {
                assert_eq!(id, "foo");
                assert_eq!(alphabet, "rna");
            }
            other => panic!("expected InvalidSequence, got {other:?}"),
        }
    }

    #[test]
    fn with_tag_accepts_known_tags() {
        let seq = Sequence::with_tag("p", "mkv", "protein").unwrap();
        assert_eq!(seq.alphabet(), AlphabetKind::Protein);
        assert_eq!(seq.as_str(), "MKV");
    }

    #[test]
    fn summary_and_display() {
        let seq = Sequence::new("s1", "ACG", AlphabetKind::Dna).unwrap();
        assert_eq!(seq.summary(), "DNA s1 (3 residues): ACG");
        assert_eq!(format!("{seq}"), "ACG");
    }

    #[test]
    fn long_summary_is_truncated() {
        let seq = Sequence::new("long", "A".repeat(30), AlphabetKind::Dna).unwrap();
        assert!(seq.summary().ends_with("..."));
    }
}
