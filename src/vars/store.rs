// src/vars/store.rs

use thiserror::Error;

/// Reasons a store can refuse a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store does not know a variable by this name.
    #[error("no such variable: {0}")]
    NotFound(String),

    #[error("variable is read-only: {0}")]
    ReadOnly(String),

    #[error("{0}")]
    Rejected(String),
}

/// Name/value storage the loader applies assignments to.
///
/// Lookups feed `${name}` expansion; writes come from assignment lines.
pub trait VarStore {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError>;
}
