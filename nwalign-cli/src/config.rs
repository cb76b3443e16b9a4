//! Configuration handling for the nwalign CLI
//!
//! Supports loading defaults from an `nwalign.toml` file; command-line
//! arguments override file values.

use anyhow::{Context, Result};
use nwalign_align::{ScoringParams, DEFAULT_MAX_PATHS};
use nwalign_seq::AlphabetKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Cli;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alphabet used to validate input sequences
    pub alphabet: AlphabetKind,

    /// Match, mismatch and gap scores
    pub scoring: ScoringParams,

    pub enumeration: EnumerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Report every co-optimal alignment instead of one
    pub all_paths: bool,

    /// Upper bound on reported alignments
    pub max_paths: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            all_paths: false,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

impl Config {
    /// Load configuration from `config_path`, or `nwalign.toml` in the
    /// working directory, falling back to defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from("nwalign.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: nwalign.toml");
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(alphabet) = cli.alphabet {
            self.alphabet = alphabet;
        }
        if let Some(v) = cli.match_score {
            self.scoring.match_score = v;
        }
        if let Some(v) = cli.mismatch {
            self.scoring.mismatch_score = v;
        }
        if let Some(v) = cli.gap {
            self.scoring.gap = v;
        }
        if cli.all_paths {
            self.enumeration.all_paths = true;
        }
        if let Some(n) = cli.max_paths {
            self.enumeration.max_paths = n;
        }
    }
}
