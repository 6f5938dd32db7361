//! Error types for locator parsing and parser configuration.

use thiserror::Error;

/// Reasons a locator string cannot be turned into a [`Locator`](crate::Locator).
///
/// Every variant is terminal: a parse either yields a fully expanded record
/// or one of these.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty source locator")]
    Empty,

    #[error("unsupported scheme {scheme:?}")]
    UnsupportedScheme { scheme: String },

    #[error("incomplete repository path {path:?} for provider {provider:?}: {input:?}")]
    IncompletePath {
        path: String,
        provider: String,
        input: String,
    },

    #[error("user must be git where found {user:?}")]
    InvalidUser { user: String },

    #[error("malformed url: ref found for non git source: {input:?}")]
    InvalidReference { input: String },

    #[error("invalid url {input:?}: {source}")]
    Normalize {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Problems with a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("empty entry in {list} list")]
    EmptyToken { list: &'static str },

    #[error("scheme {scheme:?} must be lower-case")]
    UppercaseScheme { scheme: String },

    #[error("at least one scheme must be supported")]
    NoSchemes,

    #[error("fallback scheme {scheme:?} is not a supported scheme")]
    UnknownFallback { scheme: String },

    #[error("failed to compile locator pattern: {0}")]
    Pattern(#[from] regex::Error),
}
