//! Ordered shape matchers.

use super::Parts;
use crate::error::ParseError;
use crate::path::clean;
use crate::pattern::{Patterns, ProviderMatch, SshMatch};
use crate::support::Supported;

/// User forced on SSH provider shortcuts.
const PROVIDER_SSH_USER: &str = "git";

/// The shape a raw locator was recognized as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Local path; scheme `file`.
    File(Parts),
    /// Provider shortcut; scheme `https` or `ssh`.
    Provider(Parts),
    /// SCP-style address; scheme `ssh`.
    Scp(Parts),
    /// Scheme-qualified string for the generic normalizer.
    Url(String),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Provider(_) => "provider",
            Self::Scp(_) => "scp",
            Self::Url(_) => "url",
        }
    }
}

/// Decide which shape `raw` has.
///
/// An explicit `scheme://` prefix bypasses the shape matchers; its scheme,
/// lower-cased, must be in `schemes`. Without one, the matchers run in order
/// and the first hit wins. When nothing matches, `fallback` is prepended as
/// the scheme.
pub fn classify(
    raw: &str,
    schemes: &Supported,
    fallback: &str,
    patterns: &Patterns,
) -> Result<Shape, ParseError> {
    if let Some((scheme, _)) = raw.split_once("://") {
        let scheme = scheme.to_ascii_lowercase();
        if !schemes.contains(&scheme) {
            return Err(ParseError::UnsupportedScheme { scheme });
        }
        return Ok(Shape::Url(raw.to_string()));
    }

    if let Some(shape) = match_file(raw) {
        return Ok(shape);
    }

    if let Some(m) = patterns.match_provider(raw) {
        return provider(raw, m);
    }

    if let Some(m) = patterns.match_ssh(raw) {
        if !is_drive_letter(m.host) {
            return Ok(scp(m));
        }
    }

    Ok(Shape::Url(format!("{fallback}://{raw}")))
}

fn match_file(raw: &str) -> Option<Shape> {
    if raw.starts_with('/') || raw.starts_with("./") || raw.starts_with("../") {
        return Some(Shape::File(Parts {
            scheme: "file".to_string(),
            path: clean(raw),
            ..Parts::default()
        }));
    }
    None
}

fn provider(raw: &str, m: ProviderMatch<'_>) -> Result<Shape, ParseError> {
    let (scheme, username) = if m.separator == ':' {
        match m.user {
            None | Some(PROVIDER_SSH_USER) => ("ssh", PROVIDER_SSH_USER),
            Some(user) => {
                return Err(ParseError::InvalidUser {
                    user: user.to_string(),
                });
            }
        }
    } else {
        ("https", "")
    };

    let path = clean(m.path);
    if path.split('/').count() < 2 {
        return Err(ParseError::IncompletePath {
            path,
            provider: m.provider.to_string(),
            input: raw.to_string(),
        });
    }

    Ok(Shape::Provider(Parts {
        scheme: scheme.to_string(),
        username: username.to_string(),
        host: m.provider.to_string(),
        path,
    }))
}

fn scp(m: SshMatch<'_>) -> Shape {
    Shape::Scp(Parts {
        scheme: "ssh".to_string(),
        username: m.user.unwrap_or_default().to_string(),
        host: m.host.to_string(),
        path: if m.path.is_empty() {
            String::new()
        } else {
            clean(m.path)
        },
    })
}

/// `C:` and friends are Windows drives, not SSH hosts.
fn is_drive_letter(host: &str) -> bool {
    host.len() == 1 && host.as_bytes()[0].is_ascii_alphabetic()
}
