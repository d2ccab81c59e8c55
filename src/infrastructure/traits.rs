//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use serde_json::Value as Json;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// JSON-over-HTTP abstraction used by the profile lookup.
///
/// Implementations return `None` for transport failures and for bodies that
/// are not valid JSON; callers treat that as "unknown".
pub trait JsonTransport: Send + Sync {
    /// GET `url` and decode the response body.
    fn get_json(&self, url: &str) -> Option<Json>;

    /// POST `body` to `url` and decode the response body.
    fn post_json(&self, url: &str, body: &Json) -> Option<Json>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
