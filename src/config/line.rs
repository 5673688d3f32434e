// src/config/line.rs

//! Line classification.
//!
//! Every expanded line of a configuration file is exactly one of four kinds,
//! decided by its first character only.

/// Kind of a single configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line.
    Blank,
    /// Line starting with `#`.
    Comment,
    /// Line starting with `@`.
    Directive,
    /// Anything else: a `name value` or `name=value` pair.
    Assignment,
}

/// Classify an expanded line.
pub fn classify(line: &str) -> LineKind {
    match line.chars().next() {
        None => LineKind::Blank,
        Some('#') => LineKind::Comment,
        Some('@') => LineKind::Directive,
        Some(_) => LineKind::Assignment,
    }
}
