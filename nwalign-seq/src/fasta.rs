//! FASTA loading into validated [`Sequence`]s.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nwalign_core::{NwalignError, Result};

use crate::alphabet::AlphabetKind;
use crate::seq::Sequence;

/// Read every record of a FASTA file as a [`Sequence`] of the given alphabet.
///
/// See [`parse_fasta`] for the accepted layout.
///
/// # Errors
///
/// - `Io` if the file cannot be opened or read
/// - `Parse` if the file holds no records, or has data before the first header
/// - `InvalidSequence` if a record contains residues outside `alphabet`
pub fn read_fasta(path: impl AsRef<Path>, alphabet: AlphabetKind) -> Result<Vec<Sequence>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| NwalignError::io_at(path, e))?;
    let records = parse_fasta(BufReader::new(file), alphabet).map_err(|e| match e {
        NwalignError::Parse(msg) => NwalignError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    log::debug!("read {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Parse FASTA records from any buffered reader.
///
/// The record id is the full header line after `>`, trimmed. Sequence lines
/// are trimmed and joined; blank lines are skipped. A header with no sequence
/// lines yields an empty sequence. Any non-blank line before the first header,
/// including a FASTQ `@` header, is a parse error.
pub fn parse_fasta<R: BufRead>(reader: R, alphabet: AlphabetKind) -> Result<Vec<Sequence>> {
    let mut records = Vec::new();
    let mut current: Option<(String, Vec<u8>)> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some((id, residues)) = current.take() {
                records.push(Sequence::new(id, residues, alphabet)?);
            }
            current = Some((header.trim().to_string(), Vec::new()));
        } else {
            match current.as_mut() {
                Some((_, residues)) => residues.extend_from_slice(line.as_bytes()),
                None => {
                    return Err(NwalignError::Parse(format!(
                        "line {}: sequence data before first FASTA header",
                        lineno + 1
                    )))
                }
            }
        }
    }

    if let Some((id, residues)) = current {
        records.push(Sequence::new(id, residues, alphabet)?);
    }

    if records.is_empty() {
        return Err(NwalignError::Parse("no FASTA records found".into()));
    }
    Ok(records)
}

/// Read a FASTA file that must contain exactly one record.
pub fn read_single_fasta(path: impl AsRef<Path>, alphabet: AlphabetKind) -> Result<Sequence> {
    let path = path.as_ref();
    let mut records = read_fasta(path, alphabet)?;
    if records.len() != 1 {
        return Err(NwalignError::InvalidInput(format!(
            "{}: expected exactly one FASTA record, found {}",
            path.display(),
            records.len()
        )));
    }
    Ok(records.remove(0))
}
