use std::collections::{BTreeMap, BTreeSet};

use loadconfig::vars::{StoreError, VarStore};

/// Variable store that records every write attempt in order.
///
/// - names in `missing` fail with [`StoreError::NotFound`],
/// - names in `failing` fail with [`StoreError::Rejected`],
/// - everything else is stored and readable back for `${name}` expansion.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    writes: Vec<(String, String)>,
    values: BTreeMap<String, String>,
    missing: BTreeSet<String>,
    failing: BTreeSet<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_missing(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }

    pub fn with_failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Every `set` call, successful or not, in call order.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Writes as borrowed pairs, convenient for `assert_eq!` against literals.
    pub fn write_pairs(&self) -> Vec<(&str, &str)> {
        self.writes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl VarStore for RecordingStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        self.writes.push((name.to_string(), value.to_string()));
        if self.missing.contains(name) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        if self.failing.contains(name) {
            return Err(StoreError::Rejected(format!("write to {name} rejected")));
        }
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
