//! CLI command implementations.
//!
//! - **analyze**: diagnose one submission
//! - **batch**: diagnose a JSON array of submissions in parallel
//! - **rules**: list the active rule table
//! - **init**: write a default `.failmap.toml`

pub mod analyze;
pub mod batch;
pub mod init;
pub mod rules;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use batch::{handle_batch, BatchConfig};
pub use init::init_config;
pub use rules::{handle_rules, RulesFilter};

use crate::config::{self, FailmapConfig};
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An explicit `--config` must load; otherwise discover or use defaults.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<FailmapConfig> {
    match explicit {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// CLI flag, then `[output] format`, then terminal.
pub(crate) fn resolve_format(
    flag: Option<crate::cli::OutputFormat>,
    settings: &FailmapConfig,
) -> OutputFormat {
    flag.map(Into::into)
        .or_else(|| settings.output_format().and_then(OutputFormat::from_config))
        .unwrap_or(OutputFormat::Terminal)
}

pub(crate) fn open_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    Ok(create_writer(format, sink))
}
