//! Conversion between TOML documents and configuration trees
//!
//! Unlike [`ConfigTree::from_map`], which installs entries as given, the
//! loader converts nested tables recursively into sections.

use thiserror::Error;
use toml::{Table, Value as Toml};
use tracing::trace;

use crate::domain::path;
use crate::domain::{ConfigTree, PlainMap, PlainValue, Scalar, Value};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("unsupported value at '{path}': {kind}")]
    Unsupported { path: String, kind: &'static str },
}

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Build a tree from a parsed TOML table, converting nested tables into sections.
pub fn from_toml(table: Table) -> LoaderResult<ConfigTree> {
    section_from_table("", table)
}

/// Render exported values as a TOML table.
///
/// Shallow placeholders become empty tables.
pub fn to_toml(values: &PlainMap) -> Table {
    values
        .iter()
        .map(|(key, value)| (key.clone(), plain_to_toml(value)))
        .collect()
}

/// Parse a literal as typed by a user.
///
/// Valid TOML literals (`42`, `true`, `1.5`, `"quoted"`, `[1, 2]`) keep their
/// type; anything else, including text that defines further keys, is taken
/// as a plain string.
pub fn parse_scalar(text: &str) -> Scalar {
    let parsed = format!("value = {text}")
        .parse::<Table>()
        .ok()
        .filter(|table| table.len() == 1)
        .and_then(|mut table| table.remove("value"))
        .and_then(|value| toml_to_scalar("value", value).ok());
    parsed.unwrap_or_else(|| Scalar::String(text.to_string()))
}

fn section_from_table(full_path: &str, table: Table) -> LoaderResult<ConfigTree> {
    let entries = table
        .into_iter()
        .map(|(key, value)| {
            let child_path = path::join(full_path, &key);
            toml_to_value(&child_path, value).map(|value| (key, value))
        })
        .collect::<LoaderResult<Vec<_>>>()?;
    trace!(path = full_path, entries = entries.len(), "converted table");
    Ok(ConfigTree::from_map(entries))
}

fn toml_to_value(full_path: &str, value: Toml) -> LoaderResult<Value> {
    match value {
        Toml::Table(table) => section_from_table(full_path, table).map(Value::Section),
        other => toml_to_scalar(full_path, other).map(Value::Scalar),
    }
}

fn toml_to_scalar(full_path: &str, value: Toml) -> LoaderResult<Scalar> {
    Ok(match value {
        Toml::String(s) => Scalar::String(s),
        Toml::Integer(i) => Scalar::Integer(i),
        Toml::Float(f) => Scalar::Float(f),
        Toml::Boolean(b) => Scalar::Boolean(b),
        Toml::Datetime(dt) => Scalar::String(dt.to_string()),
        Toml::Array(items) => Scalar::List(
            items
                .into_iter()
                .map(|item| toml_to_scalar(full_path, item))
                .collect::<LoaderResult<_>>()?,
        ),
        Toml::Table(_) => {
            return Err(LoaderError::Unsupported {
                path: full_path.to_string(),
                kind: "table inside an array",
            })
        }
    })
}

fn plain_to_toml(value: &PlainValue) -> Toml {
    match value {
        PlainValue::Scalar(scalar) => scalar_to_toml(scalar),
        PlainValue::Mapping(map) => Toml::Table(to_toml(map)),
    }
}

fn scalar_to_toml(scalar: &Scalar) -> Toml {
    match scalar {
        Scalar::String(s) => Toml::String(s.clone()),
        Scalar::Integer(i) => Toml::Integer(*i),
        Scalar::Float(f) => Toml::Float(*f),
        Scalar::Boolean(b) => Toml::Boolean(*b),
        Scalar::List(items) => Toml::Array(items.iter().map(scalar_to_toml).collect()),
    }
}
