//! Dotted path handling
//!
//! A path is one or more segments separated by `.`. Empty segments (leading,
//! trailing or doubled dots) are kept as literal empty-string keys.

use crate::domain::error::{DomainError, DomainResult};

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Split a path into its intermediate segments and the terminal key.
///
/// ```
/// use cfgtree::domain::path::split;
///
/// let (parents, key) = split("server.http.port");
/// assert_eq!(parents.collect::<Vec<_>>(), vec!["server", "http"]);
/// assert_eq!(key, "port");
/// ```
pub fn split(path: &str) -> (impl Iterator<Item = &str> + '_, &str) {
    let (parents, key) = match path.rsplit_once(SEPARATOR) {
        Some((parents, key)) => (Some(parents), key),
        None => (None, path),
    };
    (parents.into_iter().flat_map(|p| p.split(SEPARATOR)), key)
}

/// Full path of a child `key` below `parent`.
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{SEPARATOR}{key}")
    }
}

/// Reject an absent path argument.
///
/// `action` completes the message "Cannot {action} at empty path".
pub fn require<'a>(path: Option<&'a str>, action: &str) -> DomainResult<&'a str> {
    path.ok_or_else(|| DomainError::InvalidArgument(format!("Cannot {action} at empty path")))
}
