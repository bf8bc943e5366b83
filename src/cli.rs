// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `cookdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cookdag",
    version,
    about = "Build a static site of interactive recipe dependency graphs.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COOKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render every recipe in `recipes/` into `build/`.
    Build {
        /// Load + validate, print nodes and initially actionable ones, but
        /// don't invoke the layout engine or write any files.
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove the `build/` output directory.
    Clean,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
