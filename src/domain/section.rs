use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::domain::path;
use crate::domain::value::{PlainMap, PlainValue, Scalar, Value};

/// Ordered, nested mapping addressed by dotted paths.
///
/// Every section owns its entries; a nested section is owned by exactly one
/// parent. Paths are resolved segment by segment from the section they are
/// applied to.
///
/// `create`, `set` and `get` materialize missing intermediate sections while
/// walking, so `get` is a mutating read. A scalar found where an intermediate
/// section is expected is replaced by a fresh section. Use [`ConfigTree::peek`]
/// or [`ConfigTree::has`] for reads that leave the tree untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigTree {
    /// Dotted path from the root, empty for the root itself
    full_path: String,
    entries: IndexMap<String, Value>,
}

impl ConfigTree {
    /// Create an empty root section.
    pub fn new() -> Self {
        Self::default()
    }

    fn at(full_path: String) -> Self {
        Self {
            full_path,
            entries: IndexMap::new(),
        }
    }

    /// Build a root section from existing entries.
    ///
    /// Keys are installed as-is: no path parsing, so a key containing `.`
    /// stays a single literal key.
    pub fn from_map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut root = Self::new();
        for (key, value) in entries {
            root.insert_entry(key.into(), value);
        }
        root
    }

    /// Dotted path of this section, for diagnostics.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Direct entries of this section.
    ///
    /// Read-only: mutations must go through the path operations.
    pub fn raw_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Return the section at `path`, creating it and any missing parents.
    ///
    /// An existing section at `path` is returned unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn create(&mut self, path: &str) -> &mut ConfigTree {
        let (parents, key) = path::split(path);
        self.walk_creating(parents).section_or_insert(key)
    }

    /// Store `value` at `path`, creating missing parents.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.set_value(path, Some(value.into()));
    }

    /// Store or clear the entry at `path`.
    ///
    /// `None` removes the terminal entry; parents are still materialized.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_value(&mut self, path: &str, value: Option<Value>) {
        let (parents, key) = path::split(path);
        let section = self.walk_creating(parents);
        match value {
            Some(value) => section.insert_entry(key.to_string(), value),
            None => {
                section.entries.shift_remove(key);
            }
        }
    }

    /// Remove the entry at `path`.
    pub fn remove(&mut self, path: &str) {
        self.set_value(path, None);
    }

    /// Read the entry at `path`, materializing missing parents on the way.
    #[instrument(level = "trace", skip(self))]
    pub fn get(&mut self, path: &str) -> Option<&Value> {
        let (parents, key) = path::split(path);
        self.walk_creating(parents).entries.get(key)
    }

    /// Read the entry at `path` without touching the tree.
    pub fn peek(&self, path: &str) -> Option<&Value> {
        let (parents, key) = path::split(path);
        self.walk_existing(parents)?.entries.get(key)
    }

    /// Whether an entry exists at `path`. Never mutates.
    #[instrument(level = "trace", skip(self))]
    pub fn has(&self, path: &str) -> bool {
        let (parents, key) = path::split(path);
        self.walk_existing(parents)
            .is_some_and(|section| section.entries.contains_key(key))
    }

    pub fn get_string(&mut self, path: &str) -> Option<&str> {
        self.get(path)?.as_scalar()?.as_str()
    }

    pub fn get_int(&mut self, path: &str) -> Option<i64> {
        self.get(path)?.as_scalar()?.as_i64()
    }

    pub fn get_float(&mut self, path: &str) -> Option<f64> {
        self.get(path)?.as_scalar()?.as_f64()
    }

    pub fn get_bool(&mut self, path: &str) -> Option<bool> {
        self.get(path)?.as_scalar()?.as_bool()
    }

    pub fn get_list(&mut self, path: &str) -> Option<&[Scalar]> {
        self.get(path)?.as_scalar()?.as_list()
    }

    pub fn get_section(&mut self, path: &str) -> Option<&ConfigTree> {
        self.get(path)?.as_section()
    }

    /// Flatten the entries into plain mappings.
    ///
    /// With `deep` every nested section is exported recursively. Without it
    /// each nested section shows up as an empty mapping.
    pub fn values(&self, deep: bool) -> PlainMap {
        self.entries
            .iter()
            .map(|(key, value)| {
                let plain = match value {
                    Value::Scalar(scalar) => PlainValue::Scalar(scalar.clone()),
                    Value::Section(section) if deep => PlainValue::Mapping(section.values(true)),
                    Value::Section(_) => PlainValue::Mapping(PlainMap::new()),
                };
                (key.clone(), plain)
            })
            .collect()
    }

    fn walk_creating<'p>(&mut self, segments: impl Iterator<Item = &'p str>) -> &mut ConfigTree {
        let mut section = self;
        for segment in segments {
            section = section.section_or_insert(segment);
        }
        section
    }

    fn walk_existing<'p>(&self, segments: impl Iterator<Item = &'p str>) -> Option<&ConfigTree> {
        let mut section = self;
        for segment in segments {
            section = section.entries.get(segment)?.as_section()?;
        }
        Some(section)
    }

    fn section_or_insert(&mut self, key: &str) -> &mut ConfigTree {
        let existing = self.entries.get(key).map(Value::is_section);
        if existing != Some(true) {
            let full_path = path::join(&self.full_path, key);
            if existing == Some(false) {
                debug!(path = %full_path, "replacing scalar with section");
            }
            self.entries
                .insert(key.to_string(), Value::Section(ConfigTree::at(full_path)));
        }
        match self.entries.get_mut(key) {
            Some(Value::Section(section)) => section,
            _ => unreachable!("section inserted above"),
        }
    }

    fn insert_entry(&mut self, key: String, mut value: Value) {
        if let Value::Section(section) = &mut value {
            section.rebase(path::join(&self.full_path, &key));
        }
        self.entries.insert(key, value);
    }

    /// Reassign full paths after a subtree moved under a new parent.
    fn rebase(&mut self, full_path: String) {
        for (key, value) in self.entries.iter_mut() {
            if let Value::Section(section) = value {
                section.rebase(path::join(&full_path, key));
            }
        }
        self.full_path = full_path;
    }
}

/// Equal when paths match and entries match pairwise in insertion order.
impl PartialEq for ConfigTree {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_map(iter)
    }
}
