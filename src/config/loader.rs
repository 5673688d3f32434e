// src/config/loader.rs

//! The recursive configuration loader.
//!
//! A [`Loader`] reads one configuration file, expands and dispatches each of
//! its lines, and descends into nested files for `@include`, `@require` and
//! `@includedir`. The [`LoadContext`] is saved before every descent and
//! restored after it on every exit path, so a line failure is always reported
//! against the file and line that caused it.
//!
//! Failures on a single line are logged and recorded, and processing carries
//! on with the next line. The file-level result is the last failure seen.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::assignment::{Assignment, parse_assignment};
use crate::config::context::LoadContext;
use crate::config::directive::{CONFIG_TAG, parse_directive};
use crate::config::line::{LineKind, classify};
use crate::config::resolver::{DirectiveOutcome, resolve_directive};
use crate::errors::{LoadError, Result};
use crate::fs::{FileSystem, RealFileSystem, is_special_entry};
use crate::vars::expand::DEFAULT_WORKBUF_SIZE;
use crate::vars::{Expander, StoreError, TemplateExpander, VarStore};

/// Settings fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Emit `Processing`/`Including`/`Setting` progress lines.
    pub verbose: bool,
    /// Capacity reserved for the expanded-line buffer.
    pub workbuf_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            workbuf_size: DEFAULT_WORKBUF_SIZE,
        }
    }
}

/// A line that failed, with the position it failed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: usize,
    pub error: LoadError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} on line {}",
            self.error,
            self.file.display(),
            self.line
        )
    }
}

pub struct Loader<'a> {
    fs: &'a dyn FileSystem,
    expander: &'a dyn Expander,
    store: &'a mut dyn VarStore,
    options: LoaderOptions,
    ctx: LoadContext,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Loader<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        expander: &'a dyn Expander,
        store: &'a mut dyn VarStore,
        options: LoaderOptions,
    ) -> Self {
        Self {
            fs,
            expander,
            store,
            options,
            ctx: LoadContext::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn context(&self) -> &LoadContext {
        &self.ctx
    }

    /// Every line failure recorded during the most recent run, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Load a configuration tree starting at `root`, which must exist.
    ///
    /// Returns `Ok(())` if every line of every loaded file succeeded,
    /// otherwise the last failure of the root file.
    pub fn load_configuration(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(LoadError::InvalidArguments(
                "no configuration file given".to_string(),
            ));
        }

        self.ctx = LoadContext::default();
        self.diagnostics.clear();

        let result = self.load_file(root, true);
        self.ctx = LoadContext::default();

        match &result {
            Ok(()) => debug!(root = %root.display(), "configuration loaded"),
            Err(err) => debug!(
                root = %root.display(),
                error = %err,
                failures = self.diagnostics.len(),
                "configuration loaded with errors"
            ),
        }
        result
    }

    /// Load one file and everything it includes. A missing or
    /// non-configuration file is an error only when `required` is set.
    ///
    /// One line buffer of `workbuf_size` capacity serves the whole descent.
    pub fn load_file(&mut self, path: &Path, required: bool) -> Result<()> {
        let mut scratch = String::with_capacity(self.options.workbuf_size);
        self.load_nested(path, required, &mut scratch)
    }

    fn load_nested(&mut self, path: &Path, required: bool, scratch: &mut String) -> Result<()> {
        let result = self.with_saved_context(|loader| {
            loader.ctx.set_required(required);
            loader.read_and_process(path, scratch)
        });
        if result.is_err() {
            warn!(file = %path.display(), "failed to process {}", path.display());
        }
        result
    }

    fn with_saved_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.ctx.save();
        let out = f(self);
        self.ctx.restore(saved);
        out
    }

    fn read_and_process(&mut self, path: &Path, scratch: &mut String) -> Result<()> {
        debug!(file = %path.display(), required = self.ctx.required(), "loading configuration file");

        let bytes = match self.fs.read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(file = %path.display(), error = %err, "cannot read configuration file");
                return self.skip_or_fail(LoadError::MissingRequiredFile(path.to_path_buf()));
            }
        };

        if !bytes.starts_with(CONFIG_TAG.as_bytes()) {
            debug!(file = %path.display(), "missing {CONFIG_TAG} marker");
            return self.skip_or_fail(LoadError::NotAConfigFile(path.to_path_buf()));
        }

        // Invalid UTF-8 sequences become U+FFFD; the rest of the file loads.
        let content = String::from_utf8_lossy(&bytes);
        self.ctx.enter_file(path);
        self.process_content(&content, scratch)
    }

    fn skip_or_fail(&self, err: LoadError) -> Result<()> {
        if self.ctx.required() {
            Err(err)
        } else {
            Ok(())
        }
    }

    fn process_content(&mut self, content: &str, scratch: &mut String) -> Result<()> {
        let mut result = Ok(());

        for raw in content.split('\n') {
            if let Err(err) = self.process_line(raw, scratch) {
                self.record_failure(&err);
                result = Err(err);
            }
            self.ctx.next_line();
        }

        scratch.clear();
        result
    }

    fn process_line(&mut self, raw: &str, scratch: &mut String) -> Result<()> {
        self.expander.expand_into(raw, &*self.store, scratch)?;

        match classify(scratch.as_str()) {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Directive => {
                // The outcome owns its path, so nested files may reuse the buffer.
                let outcome = resolve_directive(&parse_directive(scratch.as_str()))?;
                self.apply_directive(outcome, scratch)
            }
            LineKind::Assignment => {
                let assignment = parse_assignment(scratch.as_str())?;
                self.assign(assignment)
            }
        }
    }

    fn apply_directive(&mut self, outcome: DirectiveOutcome, scratch: &mut String) -> Result<()> {
        let verbose = self.options.verbose;
        let required = outcome.required();
        match outcome {
            DirectiveOutcome::Info(text) => {
                if verbose {
                    info!("Processing {text}");
                }
                Ok(())
            }
            DirectiveOutcome::IncludeOptional(path) | DirectiveOutcome::IncludeMandatory(path) => {
                if verbose {
                    info!("Including {}", path.display());
                }
                self.load_nested(&path, required, scratch)
            }
            DirectiveOutcome::IncludeDirectory(dir) => {
                if verbose {
                    info!("Processing directory: {}", dir.display());
                }
                self.load_directory(&dir, required, scratch);
                Ok(())
            }
        }
    }

    /// Load every entry of `dir` with the directive's mandatory flag.
    /// Individual failures, and an unreadable directory, do not fail the
    /// directive.
    fn load_directory(&mut self, dir: &Path, required: bool, scratch: &mut String) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "cannot enumerate directory");
                return;
            }
        };

        for entry in entries.iter().filter(|p| !is_special_entry(p)) {
            if let Err(err) = self.load_nested(entry, required, scratch) {
                debug!(file = %entry.display(), error = %err, "ignoring failed directory entry");
            }
        }
    }

    fn assign(&mut self, assignment: Assignment<'_>) -> Result<()> {
        let Assignment { name, value } = assignment;
        if self.options.verbose {
            info!("Setting {name} to {value}");
        }
        self.store
            .set(name, value)
            .map_err(|err| store_failure(name, err))
    }

    fn record_failure(&mut self, err: &LoadError) {
        let diagnostic = Diagnostic {
            file: self.ctx.file().map(Path::to_path_buf).unwrap_or_default(),
            line: self.ctx.line(),
            error: err.clone(),
        };
        error!(
            file = %diagnostic.file.display(),
            line = diagnostic.line,
            "{diagnostic}"
        );
        self.diagnostics.push(diagnostic);
    }
}

fn store_failure(name: &str, err: StoreError) -> LoadError {
    match err {
        StoreError::NotFound(name) => LoadError::VariableNotFound(name),
        other => LoadError::VariableWriteFailed {
            name: name.to_string(),
            reason: other.to_string(),
        },
    }
}

/// Load `root` from the real filesystem with `${name}` expansion against
/// `store`.
pub fn load_configuration(
    root: impl AsRef<Path>,
    store: &mut dyn VarStore,
    options: LoaderOptions,
) -> Result<()> {
    let fs = RealFileSystem;
    let expander = TemplateExpander::new(options.workbuf_size);
    let mut loader = Loader::new(&fs, &expander, store, options);
    loader.load_configuration(root)
}
