// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration values, raw and typed.
//!
//! A single enum serves both sides of a parse: a raw property is usually a
//! [`ConfigValue::Text`] read from some source, but callers may also hand in an
//! already-typed value. After coercion every stored value is the canonical variant
//! for its key's [`ConfigType`].

use crate::domain::config_type::ConfigType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A configuration value.
///
/// # Examples
///
/// ```
/// use configdef::domain::{ConfigType, ConfigValue};
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.config_type(), ConfigType::Int);
/// assert_eq!(value.as_int(), Some(42));
///
/// let raw = ConfigValue::from("42");
/// assert_eq!(raw.as_text(), Some("42"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// Boolean flag.
    Bool(bool),
    /// UTF-8 string; also the shape of most raw properties.
    Text(String),
    /// String-keyed map of strings.
    Map(BTreeMap<String, String>),
    /// Ordered list of strings.
    List(Vec<String>),
}

impl ConfigValue {
    /// Returns the type this value is the canonical representation of.
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::Int(_) => ConfigType::Int,
            ConfigValue::Long(_) => ConfigType::Long,
            ConfigValue::Bool(_) => ConfigType::Bool,
            ConfigValue::Text(_) => ConfigType::Text,
            ConfigValue::Map(_) => ConfigType::Map,
            ConfigValue::List(_) => ConfigType::List,
        }
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer if this is a `Long`.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            ConfigValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the flag if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the map if this is a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ConfigValue::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the items if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Long(v)
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<&String> for ConfigValue {
    fn from(s: &String) -> Self {
        ConfigValue::Text(s.clone())
    }
}

impl From<BTreeMap<String, String>> for ConfigValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        ConfigValue::Map(map)
    }
}

impl From<HashMap<String, String>> for ConfigValue {
    fn from(map: HashMap<String, String>) -> Self {
        ConfigValue::Map(map.into_iter().collect())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(items: Vec<&str>) -> Self {
        ConfigValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Long(v) => write!(f, "{}", v),
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Text(v) => write!(f, "{:?}", v),
            ConfigValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", k, v)?;
                }
                write!(f, "}}")
            }
            ConfigValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_type_of_each_variant() {
        assert_eq!(ConfigValue::from(1).config_type(), ConfigType::Int);
        assert_eq!(ConfigValue::from(1i64).config_type(), ConfigType::Long);
        assert_eq!(ConfigValue::from(true).config_type(), ConfigType::Bool);
        assert_eq!(ConfigValue::from("x").config_type(), ConfigType::Text);
        assert_eq!(
            ConfigValue::from(BTreeMap::<String, String>::new()).config_type(),
            ConfigType::Map
        );
        assert_eq!(
            ConfigValue::from(Vec::<String>::new()).config_type(),
            ConfigType::List
        );
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let value = ConfigValue::from("10");
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_long(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_text(), Some("10"));
        assert!(value.as_map().is_none());
        assert!(value.as_list().is_none());
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        let value = ConfigValue::from(map);
        let keys: Vec<&String> = value.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_str_vec() {
        let value = ConfigValue::from(vec!["ab", "12"]);
        assert_eq!(
            value.as_list(),
            Some(&["ab".to_string(), "12".to_string()][..])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from(7).to_string(), "7");
        assert_eq!(ConfigValue::from("hi").to_string(), "\"hi\"");
        assert_eq!(ConfigValue::from(vec!["a", "b"]).to_string(), "[a, b]");

        let mut map = BTreeMap::new();
        map.insert("k1".to_string(), "10".to_string());
        map.insert("k2".to_string(), "20".to_string());
        assert_eq!(ConfigValue::from(map).to_string(), "{k1:10, k2:20}");
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_serde_untagged() {
        let value: ConfigValue = serde_yaml::from_str("[a, b]").unwrap();
        assert_eq!(value, ConfigValue::from(vec!["a", "b"]));

        let value: ConfigValue = serde_yaml::from_str("hello").unwrap();
        assert_eq!(value, ConfigValue::from("hello"));
    }
}
