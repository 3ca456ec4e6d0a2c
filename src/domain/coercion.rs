// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type coercion from raw values to canonical typed values.
//!
//! Each [`ConfigType`] has one converter. A value that is already of the declared
//! type passes through unchanged; a string is parsed according to the type's rule;
//! anything else is a [`ConfigError::TypeMismatch`].
//!
//! | Type   | String rule                                                        |
//! |--------|--------------------------------------------------------------------|
//! | `Int`  | base-10 `i32`                                                      |
//! | `Long` | base-10 `i64`                                                      |
//! | `Text` | passed through                                                     |
//! | `Bool` | `true` iff it equals `"true"` ignoring case; never fails on strings |
//! | `Map`  | `k:v` entries separated by commas, last duplicate wins             |
//! | `List` | comma-separated, items trimmed, blank items dropped                |

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{ConfigType, ConfigValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

static ITEM_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("Failed to compile item separator"));
static ENTRY_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*:\s*").expect("Failed to compile entry separator"));

/// A conversion from a raw value to the canonical value of one type.
///
/// The key name is only used to build the error.
pub type Converter = fn(&str, &ConfigValue) -> Result<ConfigValue>;

/// Lookup table from declared type to converter.
///
/// # Examples
///
/// ```
/// use configdef::domain::{CoercionTable, ConfigType, ConfigValue};
///
/// let table = CoercionTable::new();
/// let value = table.coerce("workers", ConfigType::Int, &ConfigValue::from("8")).unwrap();
/// assert_eq!(value, ConfigValue::Int(8));
///
/// let flag = table.coerce("debug", ConfigType::Bool, &ConfigValue::from("yes")).unwrap();
/// assert_eq!(flag, ConfigValue::Bool(false));
/// ```
#[derive(Clone, Debug)]
pub struct CoercionTable {
    converters: HashMap<ConfigType, Converter>,
}

impl CoercionTable {
    /// Creates a table holding the converter for every [`ConfigType`].
    pub fn new() -> Self {
        let mut converters: HashMap<ConfigType, Converter> = HashMap::new();
        converters.insert(ConfigType::Int, to_int);
        converters.insert(ConfigType::Bool, to_bool);
        converters.insert(ConfigType::Text, to_text);
        converters.insert(ConfigType::Long, to_long);
        converters.insert(ConfigType::Map, to_map);
        converters.insert(ConfigType::List, to_list);
        CoercionTable { converters }
    }

    /// Converts `value` to the canonical representation of `config_type`.
    pub fn coerce(
        &self,
        key: &str,
        config_type: ConfigType,
        value: &ConfigValue,
    ) -> Result<ConfigValue> {
        match self.converters.get(&config_type) {
            Some(convert) => convert(key, value),
            None => Err(mismatch(key, config_type, value)),
        }
    }
}

impl Default for CoercionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(key: &str, expected: ConfigType, value: &ConfigValue) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        value: value.to_string(),
    }
}

fn to_int(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    match value {
        ConfigValue::Int(_) => Ok(value.clone()),
        ConfigValue::Text(s) => s
            .parse::<i32>()
            .map(ConfigValue::Int)
            .map_err(|_| mismatch(key, ConfigType::Int, value)),
        _ => Err(mismatch(key, ConfigType::Int, value)),
    }
}

fn to_long(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    match value {
        ConfigValue::Long(_) => Ok(value.clone()),
        ConfigValue::Text(s) => s
            .parse::<i64>()
            .map(ConfigValue::Long)
            .map_err(|_| mismatch(key, ConfigType::Long, value)),
        _ => Err(mismatch(key, ConfigType::Long, value)),
    }
}

fn to_text(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    match value {
        ConfigValue::Text(_) => Ok(value.clone()),
        _ => Err(mismatch(key, ConfigType::Text, value)),
    }
}

// Any string other than "true" (ignoring case) is false, including typos.
fn to_bool(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    match value {
        ConfigValue::Bool(_) => Ok(value.clone()),
        ConfigValue::Text(s) => Ok(ConfigValue::Bool(s.eq_ignore_ascii_case("true"))),
        _ => Err(mismatch(key, ConfigType::Bool, value)),
    }
}

fn to_map(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    let text = match value {
        ConfigValue::Map(_) => return Ok(value.clone()),
        ConfigValue::Text(s) => s,
        _ => return Err(mismatch(key, ConfigType::Map, value)),
    };

    let mut map = BTreeMap::new();
    for entry in ITEM_SEPARATOR.split(text) {
        let parts: Vec<&str> = ENTRY_SEPARATOR.split(entry).collect();
        match parts.as_slice() {
            [k, v] => {
                map.insert(k.to_string(), v.to_string());
            }
            _ => return Err(mismatch(key, ConfigType::Map, value)),
        }
    }
    Ok(ConfigValue::Map(map))
}

fn to_list(key: &str, value: &ConfigValue) -> Result<ConfigValue> {
    match value {
        ConfigValue::List(_) => Ok(value.clone()),
        ConfigValue::Text(s) => Ok(ConfigValue::List(
            ITEM_SEPARATOR
                .split(s)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )),
        _ => Err(mismatch(key, ConfigType::List, value)),
    }
}
