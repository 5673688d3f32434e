// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod vars;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{Loader, LoaderOptions};
use crate::fs::RealFileSystem;
use crate::vars::{MemoryVarStore, TemplateExpander};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the variable store (seeded from `--vars` when given)
/// - the `${name}` expander sized by `--workbuf-size`
/// - the recursive loader over the real filesystem
/// - the optional `--dump` of the final store
pub fn run(args: CliArgs) -> Result<()> {
    run_with_output(args, &mut io::stdout().lock())
}

/// [`run`], writing the `--dump` document to `out` instead of stdout.
pub fn run_with_output(args: CliArgs, out: &mut dyn Write) -> Result<()> {
    let mut store = match &args.vars {
        Some(path) => MemoryVarStore::from_path(path, args.strict)?,
        None => MemoryVarStore::open(),
    };

    let options = LoaderOptions {
        verbose: args.verbose,
        workbuf_size: args.workbuf_size,
    };
    let fs = RealFileSystem;
    let expander = TemplateExpander::new(options.workbuf_size);

    let outcome = {
        let mut loader = Loader::new(&fs, &expander, &mut store, options);
        let outcome = loader.load_configuration(&args.file);
        debug!(failures = loader.diagnostics().len(), "load finished");
        outcome
    };

    if args.dump {
        out.write_all(store.to_toml_string()?.as_bytes())
            .context("writing variable dump")?;
    }

    outcome.with_context(|| format!("loading {}", args.file.display()))
}
