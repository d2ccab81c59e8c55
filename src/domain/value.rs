//! Values stored in a configuration tree

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::section::ConfigTree;

/// Leaf value: a primitive, a string or a list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<Scalar>),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, with integers widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Scalar::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Scalar {
    fn from(items: Vec<T>) -> Self {
        Scalar::List(items.into_iter().map(Into::into).collect())
    }
}

/// Entry of a section: either a leaf or a nested section.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Section(ConfigTree),
}

impl Value {
    pub fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&ConfigTree> {
        match self {
            Value::Section(section) => Some(section),
            Value::Scalar(_) => None,
        }
    }
}

impl From<ConfigTree> for Value {
    fn from(section: ConfigTree) -> Self {
        Value::Section(section)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

macro_rules! scalar_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_value_from!(&str, String, i64, i32, f64, bool);

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Scalar(items.into())
    }
}

/// Plain nested mapping produced by [`ConfigTree::values`].
pub type PlainMap = IndexMap<String, PlainValue>;

/// Exported value with no tree nodes left: a scalar or a nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlainValue {
    Scalar(Scalar),
    Mapping(PlainMap),
}

impl PlainValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            PlainValue::Scalar(s) => Some(s),
            PlainValue::Mapping(_) => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&PlainMap> {
        match self {
            PlainValue::Mapping(map) => Some(map),
            PlainValue::Scalar(_) => None,
        }
    }
}
