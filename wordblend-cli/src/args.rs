//! Command-line argument definitions

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordblend_core::{BlendConfig, FilterOptions};

use crate::error::CliError;

/// Generate portmanteau blends from a vocabulary
///
/// Each word is checked for overlapping characters against every other
/// word; "revenge" and "vengeance" share five, so "revengeance" is
/// generated from that pair.
#[derive(Debug, Parser)]
#[command(name = "wordblend", version, about, author)]
pub struct Args {
    /// Source vocabulary file[s] or dir[s] (default: stdin)
    #[arg(short, long, value_name = "PATH", num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Vocabulary file[s]/dir[s] to only source 1st words from
    #[arg(long = "w1", value_name = "PATH", num_args = 1..)]
    pub first_sources: Vec<PathBuf>,

    /// Vocabulary file[s]/dir[s] to only source 2nd words from
    #[arg(long = "w2", value_name = "PATH", num_args = 1..)]
    pub second_sources: Vec<PathBuf>,

    /// Vocabulary file with overlaps to ignore (usually common suffixes)
    #[arg(short, long, value_name = "FILE")]
    pub exclude_overlaps: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Shuffle vocabulary, instead of going alphabetically
    #[arg(short, long)]
    pub randomize: bool,

    /// Number of word blends to generate (0 = unlimited)
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub number: usize,

    /// Minimum depth of blending
    #[arg(short, long, value_name = "CHARS", default_value_t = 2)]
    pub depth: usize,

    /// Minimum number of non-overlapping chars in each word
    #[arg(short = 'f', long, value_name = "CHARS", default_value_t = 1)]
    pub minfree: usize,

    /// Minimum length of source words
    #[arg(short = 'l', long, value_name = "CHARS", default_value_t = 3)]
    pub minlength: usize,

    /// Maximum length of source words (0 = unlimited)
    #[arg(short = 'L', long, value_name = "CHARS", default_value_t = 0)]
    pub maxlength: usize,

    /// Uppercase overlapping characters in the output (ex., "reVENGEance")
    #[arg(short, long)]
    pub uppercase: bool,

    /// Also include capitalized words
    #[arg(short, long)]
    pub capitalized: bool,

    /// Also include multi-word phrases
    #[arg(short, long)]
    pub phrases: bool,

    /// Suppress progress bars
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Reject argument sets with no vocabulary source at all.
    ///
    /// Stdin counts as a source only when it is piped, mirroring the
    /// interactive-terminal check done before the engine runs.
    pub fn ensure_sources(&self, stdin_is_piped: bool) -> Result<(), CliError> {
        let pool_sources = !self.first_sources.is_empty() && !self.second_sources.is_empty();
        if self.input.is_empty() && !stdin_is_piped && !pool_sources {
            return Err(CliError::NoVocabulary);
        }
        Ok(())
    }

    /// Engine configuration from the blend-related flags
    pub fn blend_config(&self) -> Result<BlendConfig> {
        let config = BlendConfig::builder()
            .min_depth(self.depth)
            .min_free(self.minfree)
            .max_blends(self.number)
            .uppercase_overlap(self.uppercase)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Word filter policy from the vocabulary flags
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            min_length: self.minlength,
            max_length: self.maxlength,
            include_capitalized: self.capitalized,
            include_phrases: self.phrases,
            shuffle: self.randomize,
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
