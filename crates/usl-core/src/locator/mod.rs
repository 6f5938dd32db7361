//! The locator record and everything derived from it.
//!
//! A [`Locator`] is built once per parse: populated from a normalized URL or
//! a hand-parsed shape, expanded in place, and then only read.

mod attributes;
mod display;
mod expand;
mod extract;

pub use attributes::Attributes;
pub(crate) use expand::Rules;

use std::str::FromStr;

use crate::error::ParseError;

/// A parsed and expanded source locator.
///
/// All fields are strings; an empty string means the component is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locator {
    scheme: String,
    username: String,
    password: String,
    host: String,
    domain: String,
    port: String,
    path: String,
    base_path: String,
    fragment: String,
    class: String,
    name: String,
    in_path: String,
    reference: String,
    /// Host is a registered provider; set during expansion.
    provider: bool,
}

impl Locator {
    /// Names of the stored attributes, as exported by [`Locator::attributes`].
    pub const FIELDS: [&'static str; 13] = [
        "scheme", "username", "password", "host", "domain", "port", "path", "basepath",
        "fragment", "class", "name", "inpath", "ref",
    ];

    /// Retrieval protocol, e.g. `https`, `ssh` or `file`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Host including any port, e.g. `example.com:22`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host without port.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Path with any reference and class suffix removed.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// [`path`](Self::path) without its leading and trailing slash.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Archive or VCS class, e.g. `git` or `tar.gz`.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Canonical resource name, e.g. `user/repo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path inside the resource, after the name.
    pub fn in_path(&self) -> &str {
        &self.in_path
    }

    /// Revision reference (branch, tag or commit).
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Read a stored attribute by its exported name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "scheme" => &self.scheme,
            "username" => &self.username,
            "password" => &self.password,
            "host" => &self.host,
            "domain" => &self.domain,
            "port" => &self.port,
            "path" => &self.path,
            "basepath" => &self.base_path,
            "fragment" => &self.fragment,
            "class" => &self.class,
            "name" => &self.name,
            "inpath" => &self.in_path,
            "ref" => &self.reference,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn is_file(&self) -> bool {
        self.scheme == "file"
    }

    pub fn is_git(&self) -> bool {
        self.class == "git"
    }
}

impl FromStr for Locator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
