//! CLI module graph.

pub mod command;
pub mod config;
pub mod output;
pub mod serve;

use crate::error::Result;
use command::{Cli, Commands, ConfigCommand};
use output::OutputConfig;

/// Dispatch a parsed command line.
///
/// # Errors
/// Returns the first error raised by the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}
