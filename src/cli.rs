// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::vars::expand::DEFAULT_WORKBUF_SIZE;

/// Command-line arguments for `loadconfig`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loadconfig",
    version,
    about = "Load system variables from a tree of configuration files.",
    long_about = None
)]
pub struct CliArgs {
    /// Root configuration file. It must exist and start with `@config`.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Print `Processing`/`Including`/`Setting` progress lines.
    #[arg(short, long)]
    pub verbose: bool,

    /// Maximum size in bytes of a line after variable expansion.
    #[arg(
        short = 'w',
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_WORKBUF_SIZE
    )]
    pub workbuf_size: usize,

    /// TOML file declaring the variables (and initial values) of the store.
    #[arg(long, value_name = "PATH")]
    pub vars: Option<PathBuf>,

    /// Reject assignments to variables not declared in `--vars`.
    #[arg(long, requires = "vars")]
    pub strict: bool,

    /// Print the final variable store as TOML on stdout.
    #[arg(long)]
    pub dump: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LOADCONFIG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
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
