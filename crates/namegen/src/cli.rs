//! CLI command structure using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to namegen.toml (default: ./namegen.toml when present)
    #[arg(short, long, global = true, env = "NAMEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a batch of names
    Generate {
        /// Number of names (default: generate.default_count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Category label for every name (female, male or other);
        /// mixed by the configured shares when omitted
        #[arg(short, long)]
        gender: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Answer name requests read from a JSON file
    Batch {
        /// Requests file, or `-` for stdin
        input: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Validate the template and word table
    Check {
        #[arg(long)]
        json: bool,
    },
}

/// Rendering of generated names
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One name per line
    Text,
    /// `{"names": [{"id": .., "name": ..}]}`
    Json,
    /// Names separated by `<p>` inside `<html>`
    Html,
}
