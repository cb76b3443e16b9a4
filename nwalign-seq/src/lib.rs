//! Validated sequences for the nwalign workspace.
//!
//! - **Alphabets**: [`DnaAlphabet`], [`ProteinAlphabet`] and the runtime tag [`AlphabetKind`]
//! - **Sequences**: [`Sequence`], an immutable identified residue string
//! - **FASTA loading**: [`read_fasta`], [`read_single_fasta`], [`parse_fasta`]
//!
//! # Example
//!
//! ```
//! use nwalign_seq::{AlphabetKind, Sequence};
//!
//! // Lowercase input is normalized
//! let dna = Sequence::new("s1", "gattaca", AlphabetKind::Dna).unwrap();
//! assert_eq!(dna.as_str(), "GATTACA");
//!
//! // Residues outside the alphabet are rejected
//! assert!(Sequence::new("s2", "GATTXCA", AlphabetKind::Dna).is_err());
//! ```

pub mod alphabet;
pub mod fasta;
pub mod seq;

pub use alphabet::{Alphabet, AlphabetKind, DnaAlphabet, ProteinAlphabet};
pub use fasta::{parse_fasta, read_fasta, read_single_fasta};
pub use seq::Sequence;
