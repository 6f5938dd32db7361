//! Generic URL normalization.
//!
//! `url::Url` already lower-cases scheme and host, drops default ports of
//! special schemes, resolves dot segments and encodes what must be encoded.
//! On top of that the path gets unreserved escapes decoded, remaining escapes
//! upper-cased, duplicate slashes collapsed and its trailing slash removed.
//! Empty queries and fragments are dropped.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::ParseError;

pub fn normalize(input: &str) -> Result<Url, ParseError> {
    let mut url = Url::parse(input).map_err(|source| ParseError::Normalize {
        input: input.to_string(),
        source,
    })?;

    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }

    let path = normalize_path(url.path());
    if path != url.path() {
        url.set_path(&path);
    }

    tracing::trace!(%url, "normalized");
    Ok(url)
}

fn normalize_path(path: &str) -> String {
    let decoded = normalize_escapes(path);

    let mut out = String::with_capacity(decoded.len());
    for c in decoded.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    if out.ends_with('/') {
        out.pop();
    }
    out
}

/// Decode `%XX` escapes of unreserved characters and upper-case the rest.
fn normalize_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        if c == '%' {
            if let Some(escape) = rest.get(..3) {
                // A valid escape decodes to exactly one byte.
                if let [byte] = percent_decode_str(escape).collect::<Vec<u8>>()[..] {
                    if is_unreserved(byte) {
                        out.push(char::from(byte));
                    } else {
                        out.push('%');
                        out.push_str(&escape[1..].to_ascii_uppercase());
                    }
                    rest = &rest[3..];
                    continue;
                }
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}
