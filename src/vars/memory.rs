// src/vars/memory.rs

//! In-process variable store.
//!
//! The store can run in two modes:
//! - open: any name may be written,
//! - strict: only names declared up front may be written, everything else is
//!   reported as [`StoreError::NotFound`].
//!
//! A seed file declares variables (and their initial values) plus an optional
//! list of read-only names:
//!
//! ```toml
//! readonly = ["/sys/info/serial"]
//!
//! [vars]
//! "/sys/info/serial" = "A1234"
//! "/sys/network/hostname" = "localhost"
//! "/sys/network/dhcp" = 0
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use toml::Value;

use super::store::{StoreError, VarStore};

/// On-disk shape of a store seed file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreSeed {
    #[serde(default)]
    pub readonly: Vec<String>,

    #[serde(default)]
    pub vars: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryVarStore {
    vars: BTreeMap<String, String>,
    readonly: BTreeSet<String>,
    strict: bool,
}

/// Snapshot used by `--dump`.
#[derive(Debug, Serialize)]
struct StoreDump<'a> {
    vars: &'a BTreeMap<String, String>,
}

impl MemoryVarStore {
    /// An empty store that accepts any name.
    pub fn open() -> Self {
        Self::default()
    }

    /// Build a store from a parsed seed.
    ///
    /// Fails if a seeded value is an array or table, or if a read-only name
    /// is not declared in `[vars]`.
    pub fn from_seed(seed: StoreSeed, strict: bool) -> Result<Self> {
        let mut vars = BTreeMap::new();
        for (name, value) in seed.vars {
            let value = scalar_to_string(&value)
                .with_context(|| format!("seed value for {name:?}"))?;
            vars.insert(name, value);
        }

        let mut readonly = BTreeSet::new();
        for name in seed.readonly {
            if !vars.contains_key(&name) {
                bail!("read-only variable {name:?} is not declared in [vars]");
            }
            readonly.insert(name);
        }

        Ok(Self {
            vars,
            readonly,
            strict,
        })
    }

    /// Parse a TOML seed document.
    pub fn from_toml_str(contents: &str, strict: bool) -> Result<Self> {
        let seed: StoreSeed = toml::from_str(contents).context("parsing variable seed")?;
        Self::from_seed(seed, strict)
    }

    /// Read and parse a TOML seed file.
    pub fn from_path(path: impl AsRef<Path>, strict: bool) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading variable seed {:?}", path))?;
        Self::from_toml_str(&contents, strict)
            .with_context(|| format!("loading variable seed {:?}", path))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the current contents as a TOML document with a `[vars]` table.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(&StoreDump { vars: &self.vars }).context("serialising variable store")
    }
}

impl VarStore for MemoryVarStore {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        if self.readonly.contains(name) {
            return Err(StoreError::ReadOnly(name.to_string()));
        }
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None if self.strict => Err(StoreError::NotFound(name.to_string())),
            None => {
                self.vars.insert(name.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) | Value::Table(_) => bail!("only scalar values can seed a variable"),
    }
}
