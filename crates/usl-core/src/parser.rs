//! The locator parser.

use std::sync::LazyLock;

use crate::config::ParserConfig;
use crate::error::{ConfigError, ParseError};
use crate::locator::{Locator, Rules};
use crate::pattern::Patterns;
use crate::source::{self, Shape};
use crate::support::Supported;

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(Parser::default);

pub(crate) fn default_parser() -> &'static Parser {
    &DEFAULT_PARSER
}

/// Parses locator strings against one fixed configuration.
///
/// The registries and compiled patterns are read-only after construction, so
/// a parser can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    schemes: Supported,
    providers: Supported,
    classes: Supported,
    patterns: Patterns,
}

impl Parser {
    /// Validate `config` and compile its patterns.
    pub fn new(config: ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let schemes = config.scheme_set();
        let providers = config.provider_set();
        let classes = config.class_set();
        let patterns = Patterns::new(&providers, &classes)?;

        Ok(Self {
            config,
            schemes,
            providers,
            classes,
            patterns,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `raw` into a fully expanded [`Locator`].
    pub fn parse(&self, raw: &str) -> Result<Locator, ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let shape = source::classify(
            raw,
            &self.schemes,
            &self.config.fallback_scheme,
            &self.patterns,
        )?;
        tracing::debug!(input = raw, shape = shape.kind(), "classified locator");

        let mut locator = match shape {
            Shape::File(parts) | Shape::Provider(parts) | Shape::Scp(parts) => {
                Locator::from_parts(parts)
            }
            Shape::Url(url) => Locator::from_url(&source::normalize(&url)?),
        };

        let rules = Rules {
            providers: &self.providers,
            classes: &self.classes,
            patterns: &self.patterns,
        };
        locator.expand(&rules, raw)?;

        Ok(locator)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default()).expect("built-in parser configuration must be valid")
    }
}
