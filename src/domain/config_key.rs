// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key records.
//!
//! A `ConfigKey` describes one registered key: its name, declared type, default,
//! optional validator and optional description. Records are created by
//! [`ConfigDef`](crate::service::ConfigDef) and never change afterwards, which is
//! what lets copied registries share them.

use crate::domain::{ConfigType, ConfigValue};
use crate::ports::Validator;
use std::fmt;
use std::sync::Arc;

/// An immutable configuration key definition.
///
/// # Examples
///
/// ```
/// use configdef::domain::{ConfigType, ConfigValue};
/// use configdef::service::ConfigDef;
///
/// # fn main() -> configdef::domain::Result<()> {
/// let mut def = ConfigDef::new();
/// def.define("server.port", ConfigType::Int, 8080)?;
///
/// let key = def.find("server.port").unwrap();
/// assert_eq!(key.name(), "server.port");
/// assert_eq!(key.config_type(), ConfigType::Int);
/// assert_eq!(key.default_value(), &ConfigValue::Int(8080));
/// assert!(key.validator().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfigKey {
    name: String,
    config_type: ConfigType,
    default_value: ConfigValue,
    validator: Option<Arc<dyn Validator>>,
    description: Option<String>,
}

impl ConfigKey {
    pub(crate) fn new(
        name: String,
        config_type: ConfigType,
        default_value: ConfigValue,
        validator: Option<Arc<dyn Validator>>,
        description: Option<String>,
    ) -> Self {
        ConfigKey {
            name,
            config_type,
            default_value,
            validator,
            description,
        }
    }

    /// Returns the key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    pub fn config_type(&self) -> ConfigType {
        self.config_type
    }

    /// Returns the default, already coerced to the declared type.
    pub fn default_value(&self) -> &ConfigValue {
        &self.default_value
    }

    /// Returns the validator, if one was supplied.
    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// Returns the description, if one was supplied.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, default {})",
            self.name, self.config_type, self.default_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(description: Option<&str>) -> ConfigKey {
        ConfigKey::new(
            "app.name".to_string(),
            ConfigType::Text,
            ConfigValue::from("demo"),
            None,
            description.map(str::to_string),
        )
    }

    #[test]
    fn test_accessors() {
        let key = key(Some("Application name"));
        assert_eq!(key.name(), "app.name");
        assert_eq!(key.config_type(), ConfigType::Text);
        assert_eq!(key.default_value(), &ConfigValue::from("demo"));
        assert_eq!(key.description(), Some("Application name"));
    }

    #[test]
    fn test_description_is_optional() {
        assert_eq!(key(None).description(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(key(None).to_string(), "app.name (text, default \"demo\")");
    }

    #[test]
    fn test_debug_includes_name() {
        let debug = format!("{:?}", key(None));
        assert!(debug.contains("ConfigKey"));
        assert!(debug.contains("app.name"));
    }
}
