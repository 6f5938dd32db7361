//! Lexical path helpers.
//!
//! Everything here is string based: no filesystem access and no
//! platform-specific separators.

/// Return the shortest slash-separated path equivalent to `path`.
///
/// Rules:
/// - repeated slashes collapse to one
/// - `.` segments are removed
/// - `..` removes the preceding segment; at the root it is dropped, in a
///   relative path with nothing left to remove it is kept
/// - a leading slash is preserved, a trailing slash is removed
/// - an empty result becomes `.`
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Strip at most one leading and one trailing slash.
pub fn trim_slashes(path: &str) -> &str {
    let path = path.strip_suffix('/').unwrap_or(path);
    path.strip_prefix('/').unwrap_or(path)
}
