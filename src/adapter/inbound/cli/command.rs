//! Command-line interface definitions.
//!
//! Defines the CLI structure for the opencenter service using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Cluster management REST backend
#[derive(Parser, Debug)]
#[command(name = "opencenter")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the opencenter CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `opencenter config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults and overrides applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `serve` subcommand.
///
/// Flags take precedence over both the config file and environment.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file. Defaults apply when it is missing.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Listen address, e.g. `0.0.0.0:8080` or `:8080`.
    #[arg(long)]
    pub addr: Option<String>,

    /// SQLite database URL. An empty value selects the in-memory store.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Log level override (e.g. debug, info).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}
