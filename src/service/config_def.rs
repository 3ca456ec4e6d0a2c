// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration definition registry.
//!
//! `ConfigDef` is where keys are declared and where raw properties are turned
//! into typed values. Keys are registered once at startup; afterwards the
//! registry is only read, so a fully built `ConfigDef` can be shared between
//! threads and parsed from concurrently.

use crate::domain::{
    CoercionTable, ConfigError, ConfigKey, ConfigType, ConfigValue, Result, TypedValues,
};
use crate::ports::Validator;
use crate::service::PropertyLoader;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A registry of typed configuration keys.
///
/// # Parsing rules
///
/// For each raw entry, in the order the input yields them:
///
/// 1. The key must be defined, otherwise the whole parse fails with
///    `UnknownKey`.
/// 2. The raw value is coerced to the declared type. If that fails the key's
///    default is used instead and a warning is logged; this never fails the parse.
/// 3. If the key has a validator it is run against the raw value as submitted,
///    and a rejection fails the whole parse with `ValidationFailed`.
///
/// No partial result is returned on failure.
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::validators::{IntRangeValidator, RegexValidator};
/// use configdef::domain::ConfigType;
/// use configdef::service::ConfigDef;
///
/// # fn main() -> configdef::domain::Result<()> {
/// let mut def = ConfigDef::new();
/// def.define("app.name", ConfigType::Text, "demo")?
///     .define_validated("limit.max", ConfigType::Int, 99, IntRangeValidator::new(1, 100))?
///     .define_validated(
///         "username",
///         ConfigType::Text,
///         "admin",
///         RegexValidator::new("^[0-9A-Za-z]{5,10}$")?,
///     )?;
///
/// let values = def.parse([("limit.max", "1"), ("username", "abc123")])?;
/// assert_eq!(values.get_int("limit.max"), Some(1));
/// assert_eq!(values.get_text("username"), Some("abc123"));
///
/// assert!(def.parse([("limit.max", "-1")]).is_err());
/// assert!(def.parse([("no.such.key", "1")]).is_err());
/// # Ok(())
/// # }
/// ```
pub struct ConfigDef {
    /// Registered keys by name; records are shared with copies of this registry
    config_keys: HashMap<String, Arc<ConfigKey>>,
    /// Converters for each declared type
    coercions: CoercionTable,
}

impl ConfigDef {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            config_keys: HashMap::new(),
            coercions: CoercionTable::new(),
        }
    }

    /// Creates a registry holding the same keys as `other`.
    ///
    /// The key records are shared, but the copy has its own map: keys defined on
    /// either registry afterwards are not visible to the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configdef::domain::ConfigType;
    /// use configdef::service::ConfigDef;
    ///
    /// # fn main() -> configdef::domain::Result<()> {
    /// let mut base = ConfigDef::new();
    /// base.define("a", ConfigType::Int, 10)?;
    ///
    /// let mut copy = ConfigDef::copy_of(&base);
    /// copy.define("b", ConfigType::Text, "string")?;
    ///
    /// assert!(copy.contains("a"));
    /// assert!(!base.contains("b"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn copy_of(other: &ConfigDef) -> Self {
        Self {
            config_keys: other.config_keys.clone(),
            coercions: CoercionTable::new(),
        }
    }

    /// Defines a key with no validator and no description.
    ///
    /// See [`define_with`](Self::define_with) for the checks performed.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: impl Into<ConfigValue>,
    ) -> Result<&mut Self> {
        self.define_with(name, config_type, default_value, None, None)
    }

    /// Defines a key whose default and raw values must pass `validator`.
    pub fn define_validated<V>(
        &mut self,
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: impl Into<ConfigValue>,
        validator: V,
    ) -> Result<&mut Self>
    where
        V: Validator + 'static,
    {
        let validator: Arc<dyn Validator> = Arc::new(validator);
        self.define_with(name, config_type, default_value, Some(validator), None)
    }

    /// Defines a key.
    ///
    /// The default is coerced to `config_type` and, if a validator is given,
    /// checked by it. The key is only registered if every check passes; on error
    /// the registry is unchanged.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `name` is empty or whitespace
    /// * `DuplicateKey` - `name` is already defined
    /// * `TypeMismatch` - the default is not convertible to `config_type`
    /// * `ValidationFailed` - the validator rejected the default
    pub fn define_with(
        &mut self,
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: impl Into<ConfigValue>,
        validator: Option<Arc<dyn Validator>>,
        description: Option<&str>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidArgument {
                message: "name should not be blank".to_string(),
            });
        }
        if self.config_keys.contains_key(&name) {
            return Err(ConfigError::DuplicateKey { key: name });
        }

        let default_value = self
            .coercions
            .coerce(&name, config_type, &default_value.into())?;
        if let Some(validator) = &validator {
            validator.verify(&name, &default_value)?;
        }

        tracing::debug!("Defined configuration key '{}' ({})", name, config_type);
        let key = ConfigKey::new(
            name.clone(),
            config_type,
            default_value,
            validator,
            description.map(str::to_string),
        );
        self.config_keys.insert(name, Arc::new(key));
        Ok(self)
    }

    /// Parses raw properties into typed values.
    ///
    /// See the type-level documentation for the rules applied to each entry.
    ///
    /// # Errors
    ///
    /// * `UnknownKey` - an entry names a key that is not defined
    /// * `ValidationFailed` - a validator rejected an entry's raw value
    pub fn parse<I, K, V>(&self, raw: I) -> Result<TypedValues>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        let mut values = TypedValues::new();
        for (name, raw_value) in raw {
            let name = name.into();
            let raw_value = raw_value.into();
            let key = self
                .config_keys
                .get(&name)
                .ok_or_else(|| ConfigError::UnknownKey { key: name.clone() })?;

            let value = match self
                .coercions
                .coerce(&name, key.config_type(), &raw_value)
            {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("{}; using default {}", e, key.default_value());
                    key.default_value().clone()
                }
            };

            if let Some(validator) = key.validator() {
                validator.verify(&name, &raw_value)?;
            }
            values.insert(name, value);
        }
        Ok(values)
    }

    /// Loads raw properties from `loader` and parses them.
    ///
    /// # Errors
    ///
    /// Returns any error from loading the sources, or from [`parse`](Self::parse).
    pub fn load(&self, loader: &PropertyLoader) -> Result<TypedValues> {
        self.parse(loader.load()?)
    }

    /// Returns the key registered under `name`.
    pub fn find(&self, name: &str) -> Option<&ConfigKey> {
        self.config_keys.get(name).map(Arc::as_ref)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.config_keys.contains_key(name)
    }

    /// Returns the number of registered keys.
    pub fn len(&self) -> usize {
        self.config_keys.len()
    }

    /// Returns `true` if no keys are registered.
    pub fn is_empty(&self) -> bool {
        self.config_keys.is_empty()
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.config_keys.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over the registered keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.config_keys.values().map(Arc::as_ref)
    }
}

impl Default for ConfigDef {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConfigDef {
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }
}

impl From<&ConfigDef> for ConfigDef {
    fn from(other: &ConfigDef) -> Self {
        Self::copy_of(other)
    }
}

impl fmt::Debug for ConfigDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDef")
            .field("keys", &self.names())
            .finish()
    }
}
