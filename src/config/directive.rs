// src/config/directive.rs

//! Directive line parsing.

use std::str::FromStr;

use crate::errors::LoadError;

/// The literal marker every configuration file must begin with.
pub const CONFIG_TAG: &str = "@config";

/// A directive line split into its keyword and raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveLine<'a> {
    /// Keyword including the leading `@`, e.g. `@include`.
    pub keyword: &'a str,
    /// Remainder of the line after the first whitespace run, verbatim.
    pub argument: &'a str,
}

/// Split a directive line on its first run of whitespace.
///
/// Never fails. A line without whitespace yields an empty argument; whether
/// the keyword means anything is decided later by the resolver.
pub fn parse_directive(line: &str) -> DirectiveLine<'_> {
    match line.find(char::is_whitespace) {
        Some(idx) => DirectiveLine {
            keyword: &line[..idx],
            argument: line[idx..].trim_start(),
        },
        None => DirectiveLine {
            keyword: line,
            argument: "",
        },
    }
}

/// Recognised directive keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Config,
    Include,
    Require,
    IncludeDir,
}

impl Directive {
    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Config => CONFIG_TAG,
            Directive::Include => "@include",
            Directive::Require => "@require",
            Directive::IncludeDir => "@includedir",
        }
    }
}

impl FromStr for Directive {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "@config" => Ok(Directive::Config),
            "@include" => Ok(Directive::Include),
            "@require" => Ok(Directive::Require),
            "@includedir" => Ok(Directive::IncludeDir),
            other => Err(LoadError::UnsupportedDirective(other.to_string())),
        }
    }
}
