//! Error conversion helpers for document I/O
//!
//! Extension traits that attach the document path to I/O and format errors.

use std::fmt::Display;
use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&document)
    ///     .with_path_context("read document", &document)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

/// Extension trait for parse/serialize failures of a document.
pub trait DocumentResultExt<T> {
    /// Report the error as an invalid document at `path`.
    fn with_document_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T, E: Display> DocumentResultExt<T> for Result<T, E> {
    fn with_document_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Document {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })
    }
}
