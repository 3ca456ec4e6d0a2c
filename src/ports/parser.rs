// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the content of a
//! configuration file into flat raw properties.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration files.
///
/// # Key Format
///
/// Parsers should flatten nested structures using dot notation. For example,
/// a YAML structure like:
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// Should be parsed into:
/// - `database.host` -> `"localhost"`
/// - `database.port` -> `"5432"`
///
/// Values stay strings; the registry coerces them to each key's declared type.
///
/// # Examples
///
/// ```rust
/// use configdef::ports::ConfigParser;
/// use configdef::domain::Result;
/// use std::collections::HashMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let props = LineParser.parse("a = 1\nb = 2").unwrap();
/// assert_eq!(props.get("b"), Some(&"2".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a flat key-value map.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<String, String>)` - The parsed configuration as key-value pairs
    /// * `Err(ConfigError)` - An error occurred during parsing
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
