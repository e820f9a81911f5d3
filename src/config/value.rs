//! Scalar values stored in a merged configuration

use serde::{Serialize, Serializer};
use std::fmt;

/// A single flat configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    /// `nan`, `inf` and `-inf` have no JSON number form and serialize as those strings.
    Float(#[serde(serialize_with = "serialize_float")] f64),
    String(String),
}

fn serialize_float<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_finite() {
        serializer.serialize_f64(*x)
    } else if x.is_nan() {
        serializer.serialize_str("nan")
    } else if x.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

impl Value {
    /// Convert a parsed TOML value into a flat scalar.
    ///
    /// Arrays and tables have no flat representation and yield `None`.
    pub fn from_toml(value: toml::Value) -> Option<Self> {
        match value {
            toml::Value::Boolean(b) => Some(Self::Bool(b)),
            toml::Value::Integer(i) => Some(Self::Integer(i)),
            toml::Value::Float(f) => Some(Self::Float(f)),
            toml::Value::String(s) => Some(Self::String(s)),
            toml::Value::Datetime(dt) => Some(Self::String(dt.to_string())),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value as a TOML literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", toml::Value::Float(*x)),
            Self::String(s) => write!(f, "{}", toml::Value::String(s.clone())),
        }
    }
}
