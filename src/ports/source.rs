// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which raw
//! properties reach the registry. Any source of key-value pairs (environment
//! variables, files, command-line arguments, ...) implements it.

use crate::domain::{ConfigValue, Result};
use std::collections::HashMap;

/// A trait for raw property sources.
///
/// A source hands out every property it knows about as raw values; coercion
/// and validation happen later in [`ConfigDef`](crate::service::ConfigDef).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Priority
///
/// Each source has a priority value (0-255). When two sources provide the same
/// key, the value from the source with the higher priority is used. The built-in
/// adapters use:
///
/// - **3 (highest)**: Command-line arguments
/// - **2**: Environment variables
/// - **1 (lowest)**: Configuration files
///
/// # Examples
///
/// ```rust
/// use configdef::domain::{ConfigValue, Result};
/// use configdef::ports::ConfigSource;
/// use std::collections::HashMap;
///
/// struct StaticSource;
///
/// impl ConfigSource for StaticSource {
///     fn name(&self) -> &str {
///         "static"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn properties(&self) -> Result<HashMap<String, ConfigValue>> {
///         let mut map = HashMap::new();
///         map.insert("app.name".to_string(), ConfigValue::from("demo"));
///         Ok(map)
///     }
/// }
///
/// let source = StaticSource;
/// assert_eq!(source.properties().unwrap().len(), 1);
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging and error messages. It should be a short,
    /// descriptive identifier like "env", "yaml-file", "cli".
    fn name(&self) -> &str;

    /// Returns the priority of this source.
    ///
    /// Higher values take precedence over lower values.
    fn priority(&self) -> u8;

    /// Returns every property this source provides.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap)` - The raw properties, possibly empty
    /// * `Err(ConfigError)` - The source could not be read
    fn properties(&self) -> Result<HashMap<String, ConfigValue>>;
}
