//! Expansion of an extracted record: reference and class stripping,
//! provider defaulting, name derivation and validation.

use super::Locator;
use crate::error::ParseError;
use crate::path::trim_slashes;
use crate::pattern::Patterns;
use crate::support::Supported;

/// What expansion needs from the parser that owns it.
pub(crate) struct Rules<'a> {
    pub providers: &'a Supported,
    pub classes: &'a Supported,
    pub patterns: &'a Patterns,
}

impl Locator {
    /// Run the expansion steps in order. `input` is only used in errors.
    pub(crate) fn expand(&mut self, rules: &Rules<'_>, input: &str) -> Result<(), ParseError> {
        if self.scheme.ends_with("+ssh") {
            self.scheme = "ssh".to_string();
        }

        if let Some((before, reference)) = rules.patterns.match_reference(&self.path) {
            let before = before.to_string();
            self.reference = reference.to_string();
            self.path = before;
        }

        if let Some(m) = rules.patterns.match_class(&self.path) {
            if rules.classes.contains(m.class) {
                let (before, class, after) = (
                    m.before.to_string(),
                    m.class.to_string(),
                    m.after.to_string(),
                );
                self.name = trim_slashes(&before).to_string();
                self.in_path = trim_slashes(&after).to_string();
                self.class = class;
                self.path = before;
            }
        }

        self.base_path = trim_slashes(&self.path).to_string();

        self.provider = rules.providers.contains(&self.host);
        if self.provider {
            tracing::debug!(provider = %self.host, "applying provider defaults");

            if self.class.is_empty() {
                self.class = "git".to_string();
            }

            if self.name.is_empty() {
                let parts: Vec<&str> = self.base_path.split('/').collect();
                if parts.len() < 2 {
                    return Err(ParseError::IncompletePath {
                        path: self.path.clone(),
                        provider: self.host.clone(),
                        input: input.to_string(),
                    });
                }

                self.name = parts[..2].join("/");
                self.in_path = parts[2..].join("/");
            }
        }

        if self.name.is_empty() {
            self.name = self.base_path.clone();
        }

        if !self.reference.is_empty() && self.class != "git" {
            return Err(ParseError::InvalidReference {
                input: input.to_string(),
            });
        }

        Ok(())
    }
}
