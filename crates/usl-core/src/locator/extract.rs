//! Field extraction from parsed inputs.

use percent_encoding::percent_decode_str;
use url::{Host, Url};

use super::Locator;
use crate::source::Parts;

impl Locator {
    /// Populate the network, user-info and path fields from a normalized URL.
    pub(crate) fn from_url(url: &Url) -> Self {
        let host_str = url.host_str().unwrap_or_default();
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();

        let host = if port.is_empty() {
            host_str.to_string()
        } else {
            format!("{host_str}:{port}")
        };

        let domain = match url.host() {
            Some(Host::Ipv6(addr)) => addr.to_string(),
            _ => host_str.to_string(),
        };

        Self {
            scheme: url.scheme().to_string(),
            username: decode(url.username()),
            password: url.password().map(decode).unwrap_or_default(),
            host,
            domain,
            port,
            path: decode(url.path()),
            fragment: url.fragment().unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Populate fields from a hand-parsed file, provider or SCP shape.
    pub(crate) fn from_parts(parts: Parts) -> Self {
        Self {
            scheme: parts.scheme,
            username: parts.username,
            domain: parts.host.clone(),
            host: parts.host,
            path: parts.path,
            ..Self::default()
        }
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
