// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `courseplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseplan",
    version,
    about = "Generate and validate multi-semester course plans.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the program file (TOML): catalog, requirements, settings.
    #[arg(long, value_name = "PATH", default_value = "program.toml")]
    pub catalog: String,

    /// Path to the planning request (TOML).
    ///
    /// If omitted, plans for a student with nothing completed using default
    /// options.
    #[arg(long, value_name = "PATH")]
    pub request: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Also list which courses the student can take right now.
    #[arg(long)]
    pub roadmap: bool,

    /// Parse + validate, print the catalog and requirements, but don't plan.
    #[arg(long)]
    pub dry_run: bool,
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
