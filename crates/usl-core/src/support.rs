//! Closed sets of recognized schemes, providers and classes.

use std::collections::HashSet;

/// Schemes accepted in an explicit `scheme://` prefix.
pub const SCHEMES: &[&str] = &[
    "https", "http", "ssh", "git", "git+ssh", "ftp", "ftps", "file",
];

/// Hosting services that get shortcut and owner/name splitting rules.
pub const PROVIDERS: &[&str] = &[
    "bitbucket.com",
    "github.com",
    "gitlab.com",
    "salsa.debian.org",
];

/// Archive and version control classes detected from a path suffix.
pub const CLASSES: &[&str] = &["git", "tar.bz2", "tar.gz", "tar.xz", "tgz", "zip"];

/// Scheme prepended to inputs that carry none and match no other shape.
pub const FALLBACK_SCHEME: &str = "https";

/// An immutable set of tokens that remembers insertion order.
///
/// Membership is exact and case-sensitive. The ordered list is what pattern
/// alternations are built from, so compiled patterns are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supported {
    set: HashSet<String>,
    list: Vec<String>,
}

impl Supported {
    /// Build a set from `items`; repeated items keep their first position.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        let mut list = Vec::new();

        for item in items {
            let item = item.into();
            if set.insert(item.clone()) {
                list.push(item);
            }
        }

        Self { set, list }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.set.contains(token)
    }

    /// Tokens in construction order.
    pub fn list(&self) -> &[String] {
        &self.list
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Supported {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
