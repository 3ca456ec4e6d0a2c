// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of value types a configuration key can declare.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a configuration key.
///
/// Each variant determines both the coercion rule applied to raw values and the
/// canonical [`ConfigValue`](crate::domain::ConfigValue) variant stored for it.
///
/// # Examples
///
/// ```
/// use configdef::domain::ConfigType;
///
/// assert_eq!(ConfigType::Long.to_string(), "long");
/// assert_eq!(ConfigType::ALL.len(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    /// 32-bit signed integer.
    Int,
    /// Boolean flag.
    Bool,
    /// UTF-8 string.
    Text,
    /// 64-bit signed integer.
    Long,
    /// String-keyed map of strings.
    Map,
    /// Ordered list of strings.
    List,
}

impl ConfigType {
    /// Every declared type, in declaration order.
    pub const ALL: [ConfigType; 6] = [
        ConfigType::Int,
        ConfigType::Bool,
        ConfigType::Text,
        ConfigType::Long,
        ConfigType::Map,
        ConfigType::List,
    ];

    /// Returns the lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Int => "int",
            ConfigType::Bool => "bool",
            ConfigType::Text => "text",
            ConfigType::Long => "long",
            ConfigType::Map => "map",
            ConfigType::List => "list",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
