//! USL Core Library
//!
//! Resolves free-form source locators (local paths, SCP-style SSH addresses,
//! provider shortcuts such as `github.com/user/repo`, and conventional URLs)
//! into a normalized [`Locator`] that can be queried field by field and
//! rendered back into a single canonical string.
//!
//! ```
//! let locator = usl_core::parse("github.com:user/repo@v1.2").unwrap();
//!
//! assert_eq!(locator.scheme(), "ssh");
//! assert_eq!(locator.name(), "user/repo");
//! assert_eq!(locator.reference(), "v1.2");
//! assert_eq!(locator.to_string(), "git@github.com:user/repo.git");
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod parser;
pub mod path;
pub mod pattern;
pub mod source;
pub mod support;

pub use config::ParserConfig;
pub use error::{ConfigError, ParseError};
pub use locator::{Attributes, Locator};
pub use parser::Parser;
pub use support::Supported;

/// Parse a source locator with the built-in configuration.
pub fn parse(raw: &str) -> Result<Locator, ParseError> {
    parser::default_parser().parse(raw)
}

/// Re-exports of commonly used types
pub mod prelude {
    // Parsing
    pub use crate::parser::Parser;
    pub use crate::{ConfigError, ParseError};

    // Records
    pub use crate::locator::{Attributes, Locator};

    // Configuration
    pub use crate::config::ParserConfig;
    pub use crate::support::Supported;
}
