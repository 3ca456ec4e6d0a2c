// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a mock property source and checks that custom
//! sources and validators plug into the loader and registry.

use configdef::domain::{ConfigError, ConfigValue, Result};
use configdef::ports::{ConfigSource, Validator};
use configdef::prelude::{ConfigDef, ConfigType, ErrorKind, PropertyLoader};
use std::collections::HashMap;

/// A mock property source for testing.
///
/// This allows tests to easily create a source with predefined values
/// and custom priority.
#[derive(Debug, Clone)]
pub struct MockConfigSource {
    name: String,
    priority: u8,
    values: HashMap<String, ConfigValue>,
    should_fail: bool,
}

impl MockConfigSource {
    /// Creates a new mock source with the given name and priority.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            values: HashMap::new(),
            should_fail: false,
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Makes every call fail.
    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }

    fn error(&self) -> ConfigError {
        ConfigError::SourceError {
            source_name: self.name.clone(),
            message: "mock failure".to_string(),
            source: None,
        }
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn properties(&self) -> Result<HashMap<String, ConfigValue>> {
        if self.should_fail {
            return Err(self.error());
        }
        Ok(self.values.clone())
    }
}

/// Accepts only even integers.
#[derive(Debug)]
struct EvenValidator;

impl Validator for EvenValidator {
    fn verify(&self, name: &str, value: &ConfigValue) -> Result<()> {
        let even = match value {
            ConfigValue::Int(v) => v % 2 == 0,
            ConfigValue::Text(s) => s.parse::<i32>().map(|v| v % 2 == 0).unwrap_or(false),
            _ => false,
        };
        if even {
            Ok(())
        } else {
            Err(ConfigError::validation(name, format!("{} is not even", value)))
        }
    }
}

#[test]
fn test_mock_source_basic() {
    let source = MockConfigSource::new("test", 1).with_value("key1", "value1");

    assert_eq!(source.name(), "test");
    assert_eq!(source.priority(), 1);
    assert_eq!(
        source.properties().unwrap().get("key1"),
        Some(&ConfigValue::from("value1"))
    );
}

#[test]
fn test_mock_source_failing() {
    let source = MockConfigSource::new("test", 1).failing();
    assert_eq!(source.properties().unwrap_err().kind(), ErrorKind::Source);
}

#[test]
fn test_typed_values_from_custom_source() {
    let mut def = ConfigDef::new();
    def.define("port", ConfigType::Int, 80).unwrap();
    def.define("debug", ConfigType::Bool, false).unwrap();

    let loader = PropertyLoader::new().with_source(Box::new(
        MockConfigSource::new("typed", 1)
            .with_value("port", 443)
            .with_value("debug", true),
    ));

    let values = def.load(&loader).unwrap();
    assert_eq!(values.get_int("port"), Some(443));
    assert_eq!(values.get_bool("debug"), Some(true));
}

#[test]
fn test_custom_source_priority() {
    let mut def = ConfigDef::new();
    def.define("mode", ConfigType::Text, "dev").unwrap();

    let loader = PropertyLoader::new()
        .with_source(Box::new(MockConfigSource::new("base", 1).with_value("mode", "base")))
        .with_source(Box::new(MockConfigSource::new("override", 9).with_value("mode", "prod")));

    assert_eq!(loader.source_names(), vec!["override", "base"]);
    let values = def.load(&loader).unwrap();
    assert_eq!(values.get_text("mode"), Some("prod"));
}

#[test]
fn test_failing_source_aborts_load() {
    let mut def = ConfigDef::new();
    def.define("mode", ConfigType::Text, "dev").unwrap();

    let loader = PropertyLoader::new()
        .with_source(Box::new(MockConfigSource::new("ok", 1).with_value("mode", "x")))
        .with_source(Box::new(MockConfigSource::new("broken", 2).failing()));

    let err = def.load(&loader).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Source);
}

#[test]
fn test_custom_validator() {
    let mut def = ConfigDef::new();
    def.define_validated("pairs", ConfigType::Int, 2, EvenValidator)
        .unwrap();

    assert!(def.define_validated("odd", ConfigType::Int, 3, EvenValidator).is_err());
    assert_eq!(def.parse(vec![("pairs", "8")]).unwrap().get_int("pairs"), Some(8));

    let err = def.parse(vec![("pairs", "7")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert!(err.to_string().contains("is not even"));
}
