//! Command-line interface definitions.

pub mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use setup::build_thread_pool;

#[derive(Parser, Debug)]
#[command(name = "failmap")]
#[command(
    about = "Explain why a competitive-programming submission failed (TLE, WA, RE, Overflow, MLE)",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one submission
    Analyze {
        /// Source file, or `-` for stdin
        path: PathBuf,

        /// Judge verdict: TLE, WA, RE, Overflow or MLE
        #[arg(short = 'e', long = "error-type")]
        error_type: String,

        /// Source language (inferred from the file extension when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Problem constraints, e.g. "1 <= n <= 2*10^5"
        #[arg(short, long)]
        constraints: Option<String>,

        /// Problem category tag, echoed in the report
        #[arg(short, long)]
        topic: Option<String>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery of .failmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze a JSON array of requests in parallel
    Batch {
        /// JSON file holding an array of requests
        requests: PathBuf,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery of .failmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// List the active rule table
    Rules {
        /// Only rules with a clause for this verdict
        #[arg(short = 'e', long = "error-type")]
        error_type: Option<String>,

        /// Only rules of this topic (array, dp, graph, ...)
        #[arg(short, long)]
        topic: Option<String>,

        /// Configuration file (skips discovery of .failmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default .failmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
