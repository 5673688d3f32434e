// src/vars/expand.rs

//! `${name}` expansion of raw configuration lines.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::store::VarStore;

/// Default upper bound on an expanded line, in bytes.
pub const DEFAULT_WORKBUF_SIZE: usize = 8192;

static VAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]*)\}").expect("variable reference pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("unknown variable ${{{0}}}")]
    UnknownVariable(String),

    #[error("unclosed variable reference (missing '}}')")]
    Unclosed,

    #[error("expanded line exceeds {limit} bytes")]
    LineTooLong { limit: usize },
}

/// Substitutes variable references in a raw line.
pub trait Expander {
    /// Expand `raw` into `out`. `out` is cleared first and holds the fully
    /// expanded line on success.
    fn expand_into(
        &self,
        raw: &str,
        vars: &dyn VarStore,
        out: &mut String,
    ) -> Result<(), ExpansionError>;
}

/// Expander for `${name}` references, looked up in the variable store.
///
/// A lone `$` or `{` is copied through unchanged. A `${` without a closing
/// `}` is an error, as is a reference to a variable the store does not have.
#[derive(Debug, Clone, Copy)]
pub struct TemplateExpander {
    limit: usize,
}

impl TemplateExpander {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    fn push_literal(&self, text: &str, out: &mut String) -> Result<(), ExpansionError> {
        if text.contains("${") {
            return Err(ExpansionError::Unclosed);
        }
        self.push_checked(text, out)
    }

    fn push_checked(&self, text: &str, out: &mut String) -> Result<(), ExpansionError> {
        if out.len() + text.len() > self.limit {
            return Err(ExpansionError::LineTooLong { limit: self.limit });
        }
        out.push_str(text);
        Ok(())
    }
}

impl Default for TemplateExpander {
    fn default() -> Self {
        Self::new(DEFAULT_WORKBUF_SIZE)
    }
}

impl Expander for TemplateExpander {
    fn expand_into(
        &self,
        raw: &str,
        vars: &dyn VarStore,
        out: &mut String,
    ) -> Result<(), ExpansionError> {
        out.clear();
        let mut last = 0;

        for caps in VAR_REF.captures_iter(raw) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            self.push_literal(&raw[last..whole.start()], out)?;

            let value = vars
                .get(name.as_str())
                .ok_or_else(|| ExpansionError::UnknownVariable(name.as_str().to_string()))?;
            self.push_checked(&value, out)?;

            last = whole.end();
        }

        self.push_literal(&raw[last..], out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::MemoryVarStore;

    fn store() -> MemoryVarStore {
        let mut s = MemoryVarStore::open();
        s.set("host", "example.com").unwrap();
        s.set("port", "8080").unwrap();
        s.set("/sys/dir", "/etc/conf.d").unwrap();
        s
    }

    fn expand(raw: &str) -> Result<String, ExpansionError> {
        let mut out = String::from("stale contents");
        TemplateExpander::default().expand_into(raw, &store(), &mut out)?;
        Ok(out)
    }

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(expand("/sys/network/dhcp 1").unwrap(), "/sys/network/dhcp 1");
        assert_eq!(expand("").unwrap(), "");
    }

    #[test]
    fn substitutes_references() {
        assert_eq!(
            expand("url http://${host}:${port}/api").unwrap(),
            "url http://example.com:8080/api"
        );
        assert_eq!(
            expand("@includedir ${/sys/dir}").unwrap(),
            "@includedir /etc/conf.d"
        );
    }

    #[test]
    fn lone_dollar_and_braces_are_literal() {
        assert_eq!(expand("price $5 {x}").unwrap(), "price $5 {x}");
    }

    #[test]
    fn unknown_variable_fails() {
        assert_eq!(
            expand("a ${nope}"),
            Err(ExpansionError::UnknownVariable("nope".into()))
        );
    }

    #[test]
    fn unclosed_reference_fails() {
        assert_eq!(expand("a ${host"), Err(ExpansionError::Unclosed));
        assert_eq!(expand("${host} ${port"), Err(ExpansionError::Unclosed));
    }

    #[test]
    fn limit_applies_to_expanded_length() {
        let expander = TemplateExpander::new(10);
        let mut out = String::new();

        expander.expand_into("h ${port}", &store(), &mut out).unwrap();
        assert_eq!(out, "h 8080");

        assert_eq!(
            expander.expand_into("h ${host}", &store(), &mut out),
            Err(ExpansionError::LineTooLong { limit: 10 })
        );
        assert_eq!(
            expander.expand_into("0123456789a", &store(), &mut out),
            Err(ExpansionError::LineTooLong { limit: 10 })
        );
    }
}
