//! Read-only view over the merged configuration

use super::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Effective configuration after folding every source.
///
/// The typed getters never fail: a key that is absent, or present with a
/// different type, reads as the zero value of the requested type. Use
/// [`MergedConfig::contains`] or the `*_value` lookups to tell "unset" apart
/// from an explicit `false`/`0`/`""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedConfig {
    values: BTreeMap<String, Value>,
}

impl MergedConfig {
    pub(crate) fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.bool_value(key).unwrap_or_default()
    }

    pub fn get_int64(&self, key: &str) -> i64 {
        self.int_value(key).unwrap_or_default()
    }

    /// Same as [`MergedConfig::get_int64`].
    pub fn get_int(&self, key: &str) -> i64 {
        self.get_int64(key)
    }

    pub fn get_string(&self, key: &str) -> String {
        self.str_value(key).map(str::to_string).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn int_value(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
