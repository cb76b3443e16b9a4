//! CSV export of score matrices, one matrix row per line.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::WriterBuilder;
use nwalign_align::ScoreMatrix;
use nwalign_core::{NwalignError, Result};

fn csv_err(e: ::csv::Error) -> NwalignError {
    if e.is_io_error() {
        NwalignError::Io(e.into())
    } else {
        NwalignError::Parse(e.to_string())
    }
}

/// Write `matrix` as header-less CSV.
pub fn write_matrix_csv<W: Write>(matrix: &ScoreMatrix, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for row in matrix.iter_rows() {
        wtr.write_record(row.iter().map(i64::to_string))
            .map_err(csv_err)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `matrix` as CSV to `path`.
pub fn save_matrix_csv(matrix: &ScoreMatrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| NwalignError::io_at(path, e))?;
    write_matrix_csv(matrix, file)?;
    log::info!(
        "wrote {}x{} score matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwalign_align::ScoringParams;
    use nwalign_seq::{AlphabetKind, Sequence};
    use tempfile::NamedTempFile;

    fn matrix() -> ScoreMatrix {
        let s1 = Sequence::new("s1", "AG", AlphabetKind::Dna).unwrap();
        let s2 = Sequence::new("s2", "A", AlphabetKind::Dna).unwrap();
        ScoreMatrix::build(&s1, &s2, &ScoringParams::new(1, -1, -1))
    }

    #[test]
    fn one_row_per_line() {
        let mut out = Vec::new();
        write_matrix_csv(&matrix(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0,-1\n-1,1\n-2,0\n");
    }

    #[test]
    fn saved_file_matches_writer_output() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        save_matrix_csv(&matrix(), file.path()).unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "0,-1\n-1,1\n-2,0\n");
    }

    #[test]
    fn wide_scores_are_written_in_full() {
        let s1 = Sequence::new("s1", "AAA", AlphabetKind::Dna).unwrap();
        let s2 = Sequence::new("s2", "", AlphabetKind::Dna).unwrap();
        let m = ScoreMatrix::build(&s1, &s2, &ScoringParams::new(1, -1, i32::MIN));
        let mut out = Vec::new();
        write_matrix_csv(&m, &mut out).unwrap();
        let last = String::from_utf8(out).unwrap().lines().last().unwrap().to_string();
        assert_eq!(last, (3 * i64::from(i32::MIN)).to_string());
    }

    #[test]
    fn save_to_missing_dir_fails() {
        assert!(save_matrix_csv(&matrix(), "/nonexistent/dir/m.csv").is_err());
    }
}
