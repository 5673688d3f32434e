// src/config/mod.rs

//! Configuration file interpretation.
//!
//! Responsibilities:
//! - Classify lines (`line.rs`).
//! - Split directives and assignments (`directive.rs`, `assignment.rs`).
//! - Turn directives into loader actions (`resolver.rs`).
//! - Track the position in the include tree (`context.rs`).
//! - Drive the recursive load (`loader.rs`).

pub mod assignment;
pub mod context;
pub mod directive;
pub mod line;
pub mod loader;
pub mod resolver;

pub use assignment::{Assignment, parse_assignment};
pub use context::LoadContext;
pub use directive::{CONFIG_TAG, Directive, DirectiveLine, parse_directive};
pub use line::{LineKind, classify};
pub use loader::{Diagnostic, Loader, LoaderOptions, load_configuration};
pub use resolver::{DirectiveOutcome, resolve_directive};
