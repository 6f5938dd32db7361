//! Canonical string form of a locator.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::Locator;

/// Characters escaped in the user-info of the generic URL form.
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in the path of the generic URL form. `%` is included
/// because the stored path is fully decoded.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

impl Locator {
    /// The canonical string form, same as `to_string()`.
    pub fn source(&self) -> String {
        self.to_string()
    }

    fn write_name(&self, f: &mut fmt::Formatter<'_>, name: impl fmt::Display) -> fmt::Result {
        write!(f, "{name}")?;
        if !self.class.is_empty() {
            write!(f, ".{}", self.class)?;
        }
        Ok(())
    }

    /// Whether `[user@]host:name` reads back as this locator.
    ///
    /// The SCP matcher only takes word-character users and hostname-safe
    /// hosts, a one-letter host is a drive letter, and a provider host is read
    /// as a shortcut that forces the `git` user.
    fn has_scp_form(&self) -> bool {
        let user_ok = self
            .username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        let host_ok = self.host.len() > 1
            && self
                .host
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
        let provider_ok = !self.provider || self.username == "git";

        user_ok && host_ok && provider_ok
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme == "file" {
            return self.write_name(f, &self.path);
        }

        if self.scheme == "ssh" && self.port.is_empty() && self.has_scp_form() {
            if !self.username.is_empty() {
                write!(f, "{}@", self.username)?;
            }
            write!(f, "{}:", self.host)?;
            return self.write_name(f, &self.name);
        }

        write!(f, "{}://", self.scheme)?;
        if !self.username.is_empty() {
            write!(f, "{}", utf8_percent_encode(&self.username, USERINFO))?;
            if !self.password.is_empty() {
                write!(f, ":{}", utf8_percent_encode(&self.password, USERINFO))?;
            }
            f.write_str("@")?;
        }
        write!(f, "{}/", self.host)?;

        if self.class.is_empty() {
            write!(f, "{}", utf8_percent_encode(&self.base_path, PATH))
        } else {
            self.write_name(f, utf8_percent_encode(&self.name, PATH))
        }
    }
}
