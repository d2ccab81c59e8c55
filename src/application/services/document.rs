//! Document service
//!
//! Loads a TOML document into a configuration tree, applies path operations
//! and writes mutations back.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::loader;
use crate::application::{ApplicationResult, DocumentResultExt, IoResultExt};
use crate::domain::path;
use crate::domain::{ConfigTree, PlainMap, Scalar, Value};
use crate::infrastructure::traits::FileSystem;

/// Service for querying and editing TOML documents by dotted path.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
}

impl DocumentService {
    /// Create a new document service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and convert a document.
    pub fn load(&self, document: &Path) -> ApplicationResult<ConfigTree> {
        debug!("load: document={}", document.display());
        let content = self
            .fs
            .read_to_string(document)
            .with_path_context("read document", document)?;
        let table = content
            .parse::<toml::Table>()
            .with_document_context(document)?;
        loader::from_toml(table).with_document_context(document)
    }

    /// Load a document, or start an empty tree if it does not exist yet.
    fn load_or_new(&self, document: &Path) -> ApplicationResult<ConfigTree> {
        if self.fs.exists(document) {
            self.load(document)
        } else {
            debug!("load_or_new: {} missing, starting empty", document.display());
            Ok(ConfigTree::new())
        }
    }

    /// Export the whole tree and write it as pretty TOML.
    ///
    /// TOML puts root scalars ahead of tables, so saved root keys may come
    /// back in a different order; order within each table is kept.
    pub fn save(&self, document: &Path, tree: &ConfigTree) -> ApplicationResult<()> {
        let table = loader::to_toml(&tree.values(true));
        let content = toml::to_string_pretty(&table).with_document_context(document)?;
        self.fs
            .ensure_parent(document)
            .with_path_context("create parent directory", document)?;
        self.fs
            .write(document, &content)
            .with_path_context("write document", document)?;
        debug!("save: wrote {}", document.display());
        Ok(())
    }

    /// Value at `key`. The document is never written back.
    pub fn get(&self, document: &Path, key: Option<&str>) -> ApplicationResult<Option<Value>> {
        let key = path::require(key, "read a value")?;
        let mut tree = self.load(document)?;
        Ok(tree.get(key).cloned())
    }

    pub fn has(&self, document: &Path, key: Option<&str>) -> ApplicationResult<bool> {
        let key = path::require(key, "look up a value")?;
        Ok(self.load(document)?.has(key))
    }

    /// Store or clear `key`, creating the document when needed.
    pub fn set(
        &self,
        document: &Path,
        key: Option<&str>,
        value: Option<Scalar>,
    ) -> ApplicationResult<()> {
        let key = path::require(key, "set a value")?;
        let mut tree = self.load_or_new(document)?;
        debug!("set: {}={:?}", key, value);
        tree.set_value(key, value.map(Value::Scalar));
        self.save(document, &tree)
    }

    pub fn remove(&self, document: &Path, key: Option<&str>) -> ApplicationResult<()> {
        let key = path::require(key, "remove a value")?;
        self.set(document, Some(key), None)
    }

    /// Ensure a section exists at `key`.
    pub fn create_section(&self, document: &Path, key: Option<&str>) -> ApplicationResult<()> {
        let key = path::require(key, "create section")?;
        let mut tree = self.load_or_new(document)?;
        tree.create(key);
        self.save(document, &tree)
    }

    pub fn values(&self, document: &Path, deep: bool) -> ApplicationResult<PlainMap> {
        Ok(self.load(document)?.values(deep))
    }
}
