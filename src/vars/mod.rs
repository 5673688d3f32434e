// src/vars/mod.rs

//! Variable store and `${name}` expansion.
//!
//! - `store.rs`: the [`VarStore`] interface the loader reads and writes.
//! - `memory.rs`: an in-process store, optionally seeded from TOML.
//! - `expand.rs`: the [`Expander`] interface and its template implementation.

pub mod expand;
pub mod memory;
pub mod store;

pub use expand::{Expander, ExpansionError, TemplateExpander};
pub use memory::MemoryVarStore;
pub use store::{StoreError, VarStore};
