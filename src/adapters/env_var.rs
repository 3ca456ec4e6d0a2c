// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable property source adapter.
//!
//! This module provides an adapter that reads raw properties from
//! environment variables.

use crate::domain::{ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Property source adapter for environment variables.
///
/// This adapter reads raw properties from environment variables. It supports
/// optional prefix filtering (e.g., only read variables starting with "APP_") and
/// key transformation (e.g., converting underscores to dots).
///
/// Every variable that survives filtering becomes a property, so a registry
/// parsing these properties must define all of them. Use a prefix to keep
/// unrelated variables like `PATH` out.
///
/// # Priority
///
/// Environment variables have a priority of 2, which means they override configuration
/// files (priority 1) but are overridden by command-line arguments (priority 3).
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::EnvVarAdapter;
///
/// // Read only variables with a specific prefix, as lowercase dotted keys
/// let adapter = EnvVarAdapter::with_prefix("MYAPP_").lowercase_keys(true);
/// ```
#[derive(Debug)]
pub struct EnvVarAdapter {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Fixed values used instead of the process environment
    fixed: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates a new environment variable adapter without prefix filtering.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            fixed: None,
        }
    }

    /// Creates a new environment variable adapter with prefix filtering.
    ///
    /// Only environment variables starting with the given prefix will be read.
    /// The prefix is stripped from the key when storing values.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys.
    ///
    /// When enabled (default), underscores in environment variable names are
    /// replaced with dots to match the standard configuration key format.
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// The values are used as-is, without prefix filtering or key transformation,
    /// and the process environment is never read.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: false,
            fixed: Some(values),
        }
    }

    /// Transforms a variable name into a property key, or `None` if it is filtered out.
    fn property_key(&self, var: String) -> Option<String> {
        let mut key = match &self.prefix {
            Some(prefix) => var.strip_prefix(prefix.as_str())?.to_string(),
            None => var,
        };
        if key.is_empty() {
            return None;
        }
        if self.lowercase_keys {
            key = key.to_lowercase();
        }
        if self.replace_underscores {
            key = key.replace('_', ".");
        }
        Some(key)
    }

    /// Loads environment variables into a new HashMap.
    fn load(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();

        for (var, value) in env::vars() {
            if var.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={}",
                    var.len(),
                    value.len()
                );
                continue;
            }
            if let Some(key) = self.property_key(var) {
                values.insert(key, value);
            }
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            values.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        values
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn properties(&self) -> Result<HashMap<String, ConfigValue>> {
        match &self.fixed {
            Some(values) => Ok(to_properties(values)),
            None => Ok(to_properties(&self.load())),
        }
    }
}

fn to_properties(values: &HashMap<String, String>) -> HashMap<String, ConfigValue> {
    values
        .iter()
        .map(|(k, v)| (k.clone(), ConfigValue::from(v.as_str())))
        .collect()
}
