//! Input classification for source locators.
//!
//! A raw locator is one of four shapes, checked in order (the shapes overlap
//! lexically, so the order decides):
//! - a local file path (`/…`, `./…`, `../…`)
//! - a provider shortcut (`github.com/user/repo`, `github.com:user/repo`)
//! - an SCP-style address (`user@host:path`)
//! - anything else, handed to the generic URL normalizer

mod classify;
mod normalize;

pub use classify::{Shape, classify};
pub use normalize::normalize;

/// Fields of a hand-parsed shape, before expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts {
    pub scheme: String,
    pub username: String,
    pub host: String,
    pub path: String,
}
