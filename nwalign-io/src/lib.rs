//! Report and exchange formats for nwalign alignments.
//!
//! - **Reports**: plain text and JSON via [`AlignmentReport`]
//! - **CSV**: score matrix export, one row per line
//! - **Manual entry**: prompt for a sequence pair on any reader/writer

pub mod csv;
pub mod manual;
pub mod report;

pub use self::csv::{save_matrix_csv, write_matrix_csv};
pub use manual::read_manual;
pub use report::{format_report, write_report, AlignmentReport, AlignmentSummary};
