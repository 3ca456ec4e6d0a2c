// SPDX-License-Identifier: MIT OR Apache-2.0

//! The result of a successful parse.

use crate::domain::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Typed configuration values keyed by name.
///
/// Only keys that were present in the parsed input appear here; a key that was
/// defined but not supplied is absent rather than filled with its default.
///
/// # Examples
///
/// ```
/// use configdef::domain::ConfigType;
/// use configdef::service::ConfigDef;
///
/// # fn main() -> configdef::domain::Result<()> {
/// let mut def = ConfigDef::new();
/// def.define("workers", ConfigType::Int, 4)?
///     .define("hosts", ConfigType::List, vec!["localhost"])?;
///
/// let values = def.parse([("workers", "16"), ("hosts", "a, b")])?;
/// assert_eq!(values.get_int("workers"), Some(16));
/// assert_eq!(values.get_list("hosts"), Some(&["a".to_string(), "b".to_string()][..]));
/// assert_eq!(values.get_int("missing"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypedValues(BTreeMap<String, ConfigValue>);

impl TypedValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        TypedValues(BTreeMap::new())
    }

    pub(crate) fn insert(&mut self, key: String, value: ConfigValue) {
        self.0.insert(key, value);
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the stored values in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    /// Consumes the wrapper and returns the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, ConfigValue> {
        self.0
    }

    /// Returns the `Int` stored for `key`.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(ConfigValue::as_int)
    }

    /// Returns the `Long` stored for `key`.
    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_long)
    }

    /// Returns the `Bool` stored for `key`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// Returns the `Text` stored for `key`.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_text)
    }

    /// Returns the `Map` stored for `key`.
    pub fn get_map(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.get(key).and_then(ConfigValue::as_map)
    }

    /// Returns the `List` stored for `key`.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ConfigValue::as_list)
    }
}

impl IntoIterator for TypedValues {
    type Item = (String, ConfigValue);
    type IntoIter = btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypedValues {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
