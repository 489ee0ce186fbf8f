//! Command line argument parsing for the geoquery CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::phrase::PhraseType;
use crate::token::TokenId;

/// geoquery - trace how query tokens extend partial geocoding searches
#[derive(Parser, Debug, Clone)]
#[command(name = "geoquery")]
#[command(about = "Trace how query tokens extend partial geocoding searches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GeoQueryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Name-only search frequency threshold (overrides configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GeoQueryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level matching the verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Offer a word token to a search and print the derived searches
    Extend(ExtendArgs),

    /// Show the debug description of a word token
    Debug(WordArgs),
}

/// Description of a word token.
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Vocabulary id of the word
    #[arg(long)]
    pub id: TokenId,

    /// How often the word was seen as part of a name
    #[arg(long, default_value = "0")]
    pub count: u32,

    /// Number of terms the word covers
    #[arg(long, default_value = "1")]
    pub terms: u32,
}

/// Arguments for extending a search
#[derive(Parser, Debug, Clone)]
pub struct ExtendArgs {
    #[command(flatten)]
    pub word: WordArgs,

    /// Index of the phrase holding the token
    #[arg(long, default_value = "0")]
    pub phrase_index: usize,

    /// Number of phrases in the query
    #[arg(long)]
    pub phrase_count: Option<usize>,

    /// Type of the phrase holding the token
    #[arg(long, default_value = "default")]
    pub phrase_type: PhraseType,

    /// Name token already in the search (repeatable)
    #[arg(long = "name-token")]
    pub name_tokens: Vec<TokenId>,

    /// Non-searchable name token already in the search (repeatable)
    #[arg(long = "partial-name-token")]
    pub partial_name_tokens: Vec<TokenId>,

    /// Address token already in the search (repeatable)
    #[arg(long = "address-token")]
    pub address_tokens: Vec<TokenId>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
