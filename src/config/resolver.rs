// src/config/resolver.rs

//! Maps a parsed directive to the action the loader should take.

use std::path::PathBuf;

use crate::config::directive::{Directive, DirectiveLine};
use crate::errors::{LoadError, Result};

/// What a directive asks the loader to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveOutcome {
    /// `@config`: log the text, nothing else.
    Info(String),
    /// `@include`: load one file, absence is fine.
    IncludeOptional(PathBuf),
    /// `@require`: load one file, absence is an error.
    IncludeMandatory(PathBuf),
    /// `@includedir`: load every entry of a directory as an optional file.
    IncludeDirectory(PathBuf),
}

impl DirectiveOutcome {
    /// Mandatory flag for the files this directive loads. Only `@require`
    /// makes its target mandatory; `@config` loads nothing.
    pub fn required(&self) -> bool {
        matches!(self, DirectiveOutcome::IncludeMandatory(_))
    }
}

/// Decide the action for a directive line.
pub fn resolve_directive(line: &DirectiveLine<'_>) -> Result<DirectiveOutcome> {
    let directive: Directive = line.keyword.parse()?;

    Ok(match directive {
        Directive::Config => DirectiveOutcome::Info(line.argument.to_string()),
        Directive::Include => DirectiveOutcome::IncludeOptional(target(directive, line)?),
        Directive::Require => DirectiveOutcome::IncludeMandatory(target(directive, line)?),
        Directive::IncludeDir => DirectiveOutcome::IncludeDirectory(target(directive, line)?),
    })
}

fn target(directive: Directive, line: &DirectiveLine<'_>) -> Result<PathBuf> {
    if line.argument.is_empty() {
        return Err(LoadError::InvalidArguments(format!(
            "{} requires a path argument",
            directive.keyword()
        )));
    }
    Ok(PathBuf::from(line.argument))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::directive::parse_directive;

    fn resolve(line: &str) -> Result<DirectiveOutcome> {
        resolve_directive(&parse_directive(line))
    }

    #[test]
    fn config_is_informational() {
        let out = resolve("@config Main system configuration").unwrap();
        assert_eq!(out, DirectiveOutcome::Info("Main system configuration".into()));
        assert!(!out.required());
    }

    #[test]
    fn config_accepts_empty_text() {
        assert_eq!(resolve("@config").unwrap(), DirectiveOutcome::Info(String::new()));
    }

    #[test]
    fn include_family_flags() {
        let inc = resolve("@include software.cfg").unwrap();
        assert_eq!(inc, DirectiveOutcome::IncludeOptional("software.cfg".into()));
        assert!(!inc.required());

        let req = resolve("@require hardware.cfg").unwrap();
        assert_eq!(req, DirectiveOutcome::IncludeMandatory("hardware.cfg".into()));
        assert!(req.required());

        let dir = resolve("@includedir /etc/conf.d").unwrap();
        assert_eq!(dir, DirectiveOutcome::IncludeDirectory("/etc/conf.d".into()));
        assert!(!dir.required());
    }

    #[test]
    fn include_without_path_is_invalid() {
        for line in ["@include", "@require", "@includedir "] {
            assert!(
                matches!(resolve(line), Err(LoadError::InvalidArguments(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn unknown_keyword_is_unsupported() {
        assert_eq!(
            resolve("@exec rm -rf /"),
            Err(LoadError::UnsupportedDirective("@exec".into()))
        );
    }
}
