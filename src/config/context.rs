// src/config/context.rs

//! Position of the loader within the configuration tree.

use std::path::{Path, PathBuf};

/// The file being read, the line being dispatched, and whether that file was
/// mandatory.
///
/// A nested load replaces all three; [`LoadContext::save`] and
/// [`LoadContext::restore`] bracket every descent so the caller's position
/// survives it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadContext {
    file: Option<PathBuf>,
    line: usize,
    required: bool,
}

/// Saved copy of a [`LoadContext`], restored when a nested load returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a saved frame must be restored"]
pub struct SavedContext(LoadContext);

impl LoadContext {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Start reading `path` at line 1.
    pub fn enter_file(&mut self, path: &Path) {
        self.file = Some(path.to_path_buf());
        self.line = 1;
    }

    pub fn next_line(&mut self) {
        self.line += 1;
    }

    pub fn save(&self) -> SavedContext {
        SavedContext(self.clone())
    }

    pub fn restore(&mut self, saved: SavedContext) {
        *self = saved.0;
    }
}
