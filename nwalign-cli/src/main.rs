use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use nwalign_align::{align, align_all, GlobalAlignment};
use nwalign_core::Summarizable;
use nwalign_io::{read_manual, save_matrix_csv, write_report, AlignmentReport};
use nwalign_seq::{read_single_fasta, AlphabetKind, Sequence};

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "nwalign")]
#[command(about = "Global alignment of two sequences using the Needleman-Wunsch algorithm")]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "manual"])))]
#[command(long_about = "
Global alignment of two DNA or protein sequences using the Needleman-Wunsch
algorithm, optionally enumerating every co-optimal alignment.

Examples:
  nwalign --input a.fa b.fa --match 2 --mismatch -1 --gap -3
  nwalign --input a.fa b.fa --all-paths --max-paths 20 --json out.json
  nwalign --manual --alphabet protein --output report.txt
")]
pub struct Cli {
    /// Paths to two input FASTA files, one record each
    #[arg(long, num_args = 2, value_names = ["FASTA1", "FASTA2"])]
    pub input: Option<Vec<PathBuf>>,

    /// Enter sequences manually via prompts
    #[arg(long)]
    pub manual: bool,

    /// Sequence alphabet (dna or protein)
    #[arg(long)]
    pub alphabet: Option<AlphabetKind>,

    /// Score for a match
    #[arg(long = "match", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for a mismatch
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Penalty for a gap
    #[arg(long, allow_negative_numbers = true)]
    pub gap: Option<i32>,

    /// Report every co-optimal alignment
    #[arg(long)]
    pub all_paths: bool,

    /// Maximum number of alignments reported with --all-paths
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Text report output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON report output file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Score matrix CSV output file
    #[arg(long)]
    pub matrix_csv: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn load_sequences(cli: &Cli, alphabet: AlphabetKind) -> Result<(Sequence, Sequence)> {
    match &cli.input {
        Some(paths) => {
            let [first, second] = paths.as_slice() else {
                anyhow::bail!("--input takes exactly two FASTA files");
            };
            let seq1 = read_single_fasta(first, alphabet)
                .with_context(|| format!("Failed to load {}", first.display()))?;
            let seq2 = read_single_fasta(second, alphabet)
                .with_context(|| format!("Failed to load {}", second.display()))?;
            Ok((seq1, seq2))
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            read_manual(stdin.lock(), stdout.lock(), alphabet)
                .context("Failed to read sequences from standard input")
        }
    }
}

fn print_alignments(result: &GlobalAlignment) {
    println!("Optimal score: {}", result.score);
    for (k, pair) in result.alignments.iter().enumerate() {
        println!();
        if result.alignments.len() > 1 {
            println!("Alignment {}:", k + 1);
        }
        println!("{pair}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    let params = config.scoring;

    let (seq1, seq2) = load_sequences(&cli, config.alphabet)?;
    log::info!("Loaded {}", seq1.summary());
    log::info!("Loaded {}", seq2.summary());

    let result = if config.enumeration.all_paths {
        align_all(&seq1, &seq2, &params, config.enumeration.max_paths)?
    } else {
        align(&seq1, &seq2, &params)?
    };
    log::info!(
        "Score {} with {} alignment(s)",
        result.score,
        result.alignments.len()
    );

    print_alignments(&result);

    let report = AlignmentReport::new(&seq1, &seq2, &params, &result);
    if let Some(path) = &cli.output {
        write_report(path, &report.to_text())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
    }
    if let Some(path) = &cli.json {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write JSON: {}", path.display()))?;
    }
    if let Some(path) = &cli.matrix_csv {
        save_matrix_csv(&result.matrix, path)
            .with_context(|| format!("Failed to write matrix CSV: {}", path.display()))?;
    }

    Ok(())
}
