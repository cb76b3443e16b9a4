//! Interactive entry of a sequence pair.

use std::io::{BufRead, Write};

use nwalign_core::{NwalignError, Result};
use nwalign_seq::{AlphabetKind, Sequence};

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(NwalignError::InvalidInput(format!(
            "input ended before {label}"
        )));
    }
    Ok(line.trim().to_string())
}

/// Prompt for the id and residues of two sequences.
///
/// Residues are validated against `alphabet` as soon as each sequence is
/// entered.
pub fn read_manual<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    alphabet: AlphabetKind,
) -> Result<(Sequence, Sequence)> {
    let mut read_one = |n: usize| -> Result<Sequence> {
        let id = prompt(&mut input, &mut output, &format!("Sequence {n} ID"))?;
        let residues = prompt(&mut input, &mut output, &format!("Sequence {n}"))?;
        Sequence::new(id, residues, alphabet)
    };
    let first = read_one(1)?;
    let second = read_one(2)?;
    Ok((first, second))
}
