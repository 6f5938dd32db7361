//! Structural patterns compiled from the support registries.

use regex::{Captures, Regex};

use crate::error::ConfigError;
use crate::support::Supported;

/// `[user@]host:path`, host limited to hostname-safe characters.
const SSH_PATTERN: &str = r"^(?:(?P<user>[a-zA-Z0-9_]+)@)?(?P<host>[a-zA-Z0-9._-]+):(?P<path>.*)$";

/// Greedy up to the last `@`; the reference itself holds no `@`.
const REF_PATTERN: &str = r"^(?P<before>.+)@(?P<ref>[^@]*)$";

/// The compiled pattern library of a parser.
///
/// Patterns that depend on an empty registry are absent, which disables the
/// corresponding rule instead of matching an empty alternative.
#[derive(Debug, Clone)]
pub struct Patterns {
    provider: Option<Regex>,
    ssh: Regex,
    class: Option<Regex>,
    reference: Regex,
}

/// A provider shortcut match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMatch<'a> {
    pub user: Option<&'a str>,
    pub provider: &'a str,
    pub separator: char,
    pub path: &'a str,
}

/// An SCP-style address match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshMatch<'a> {
    pub user: Option<&'a str>,
    pub host: &'a str,
    pub path: &'a str,
}

/// A class suffix match: `<before>.<class><after>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMatch<'a> {
    pub before: &'a str,
    pub class: &'a str,
    pub after: &'a str,
}

impl Patterns {
    pub fn new(providers: &Supported, classes: &Supported) -> Result<Self, ConfigError> {
        let provider = if providers.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"^(?:(?P<user>[a-zA-Z0-9_.-]+)@)?{}(?P<sep>[/:])(?P<path>.*)?$",
                group("provider", providers)
            ))?)
        };

        let class = if classes.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"^(?P<before>.*?)[.]{}(?P<after>/.*)?$",
                group("class", classes)
            ))?)
        };

        Ok(Self {
            provider,
            ssh: Regex::new(SSH_PATTERN)?,
            class,
            reference: Regex::new(REF_PATTERN)?,
        })
    }

    pub fn match_provider<'a>(&self, input: &'a str) -> Option<ProviderMatch<'a>> {
        let caps = self.provider.as_ref()?.captures(input)?;

        Some(ProviderMatch {
            user: optional(&caps, "user"),
            provider: required(&caps, "provider"),
            separator: if required(&caps, "sep") == ":" { ':' } else { '/' },
            path: required(&caps, "path"),
        })
    }

    pub fn match_ssh<'a>(&self, input: &'a str) -> Option<SshMatch<'a>> {
        let caps = self.ssh.captures(input)?;

        Some(SshMatch {
            user: optional(&caps, "user"),
            host: required(&caps, "host"),
            path: required(&caps, "path"),
        })
    }

    pub fn match_class<'a>(&self, path: &'a str) -> Option<ClassMatch<'a>> {
        let caps = self.class.as_ref()?.captures(path)?;

        Some(ClassMatch {
            before: required(&caps, "before"),
            class: required(&caps, "class"),
            after: required(&caps, "after"),
        })
    }

    /// Split `path` into `(before, reference)` at its last `@`.
    pub fn match_reference<'a>(&self, path: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.reference.captures(path)?;

        Some((required(&caps, "before"), required(&caps, "ref")))
    }
}

/// Named alternation of the escaped registry tokens, in registry order.
fn group(name: &str, tokens: &Supported) -> String {
    let alternatives = tokens
        .iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    format!("(?P<{name}>{alternatives})")
}

fn optional<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

fn required<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}
