use anyhow::Result;
use clap::Parser;
use failmap::cli::{Cli, Commands};
use failmap::commands::{self, AnalyzeConfig, BatchConfig, RulesFilter};
use failmap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            path,
            error_type,
            language,
            constraints,
            topic,
            format,
            output,
            config,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            error_type,
            language,
            constraints,
            topic,
            format,
            output,
            config,
        }),
        Commands::Batch {
            requests,
            format,
            output,
            config,
            jobs,
        } => commands::handle_batch(BatchConfig {
            requests,
            format,
            output,
            config,
            jobs,
        }),
        Commands::Rules {
            error_type,
            topic,
            config,
        } => commands::handle_rules(RulesFilter {
            error_type,
            topic,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
