//! Configuration schema for usl.toml

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::support::{self, Supported};

/// Settings a [`Parser`](crate::Parser) is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Scheme prepended to inputs that carry none
    #[serde(default = "default_fallback_scheme")]
    pub fallback_scheme: String,

    /// Schemes accepted in an explicit `scheme://` prefix
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,

    /// Hosting providers with shortcut and owner/name rules
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Archive and VCS classes detected from path suffixes, in match order
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

fn default_fallback_scheme() -> String {
    support::FALLBACK_SCHEME.to_string()
}

fn default_schemes() -> Vec<String> {
    to_owned(support::SCHEMES)
}

fn default_providers() -> Vec<String> {
    to_owned(support::PROVIDERS)
}

fn default_classes() -> Vec<String> {
    to_owned(support::CLASSES)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fallback_scheme: default_fallback_scheme(),
            schemes: default_schemes(),
            providers: default_providers(),
            classes: default_classes(),
        }
    }
}

impl ParserConfig {
    /// Replace the provider list.
    pub fn with_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.providers = providers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the class list.
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the scheme list.
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.fallback_scheme = scheme.into();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (list, items) in [
            ("scheme", &self.schemes),
            ("provider", &self.providers),
            ("class", &self.classes),
        ] {
            if items.iter().any(|item| item.is_empty()) {
                return Err(ConfigError::EmptyToken { list });
            }
        }

        if self.schemes.is_empty() {
            return Err(ConfigError::NoSchemes);
        }

        if let Some(scheme) = self
            .schemes
            .iter()
            .find(|s| s.chars().any(|c| c.is_ascii_uppercase()))
        {
            return Err(ConfigError::UppercaseScheme {
                scheme: scheme.clone(),
            });
        }

        if !self.schemes.contains(&self.fallback_scheme) {
            return Err(ConfigError::UnknownFallback {
                scheme: self.fallback_scheme.clone(),
            });
        }

        Ok(())
    }

    pub fn scheme_set(&self) -> Supported {
        Supported::new(self.schemes.iter().cloned())
    }

    pub fn provider_set(&self) -> Supported {
        Supported::new(self.providers.iter().cloned())
    }

    pub fn class_set(&self) -> Supported {
        Supported::new(self.classes.iter().cloned())
    }
}
