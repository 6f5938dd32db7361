//! Parser configuration.
//!
//! The recognized schemes, providers and classes are plain data owned by a
//! [`Parser`](crate::Parser). They default to the built-in sets and can be
//! overridden from a TOML file:
//!
//! ```toml
//! fallback_scheme = "https"
//! providers = ["github.com", "gitlab.com", "git.example.org"]
//! ```
//!
//! Fields left out of the file keep their built-in value.

mod parser;
pub mod paths;
mod schema;

pub use parser::{from_toml_str, load, load_default, to_toml};
pub use schema::ParserConfig;
