// src/config/assignment.rs

//! `name value` / `name=value` line parsing.

use crate::errors::{LoadError, Result};

/// A parsed variable assignment, borrowing from the expanded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Split an assignment line into name and value.
///
/// If the line contains `=` anywhere, it is split on the first `=` and both
/// halves are taken verbatim. Otherwise the split is on the first run of
/// whitespace. Either side being empty is an error.
pub fn parse_assignment(line: &str) -> Result<Assignment<'_>> {
    let split = match line.split_once('=') {
        Some((name, value)) => Some((name, value)),
        None => line
            .find(char::is_whitespace)
            .map(|idx| (&line[..idx], line[idx..].trim_start())),
    };

    match split {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            Ok(Assignment { name, value })
        }
        _ => Err(LoadError::InvalidAssignment(line.to_string())),
    }
}
