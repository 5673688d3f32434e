// src/errors.rs

//! Crate-wide error types.
//!
//! [`LoadError`] is the failure taxonomy of the loader. Every variant is a
//! value a single line, or a whole file, can fail with; the loader keeps only
//! the most recent one per file.

use std::path::PathBuf;

use thiserror::Error;

use crate::vars::ExpansionError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Required file missing or unreadable: {}", .0.display())]
    MissingRequiredFile(PathBuf),

    #[error("Not a configuration file: {}", .0.display())]
    NotAConfigFile(PathBuf),

    #[error("Unsupported directive: {0}")]
    UnsupportedDirective(String),

    #[error("Invalid variable assignment: {0:?}")]
    InvalidAssignment(String),

    #[error("Variable expansion error: {0}")]
    Expansion(#[from] ExpansionError),

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Variable assignment failed for {name}: {reason}")]
    VariableWriteFailed { name: String, reason: String },
}

impl LoadError {
    /// True for failures that stem from a required file not being loadable,
    /// either because it is absent or because it lacks the `@config` marker.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            LoadError::MissingRequiredFile(_) | LoadError::NotAConfigFile(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
