// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument property source adapter.
//!
//! This module provides an adapter that reads raw properties from
//! command-line arguments.

use crate::domain::{ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// Property source adapter for command-line arguments.
///
/// Supported argument formats:
/// - `--key=value`: Long form with equals sign
/// - `--key value`: Long form with space-separated value
/// - `--key`: Long form with no value, read as `"true"`
/// - `-k value`: Short form with space-separated value
///
/// Positional arguments are ignored. When a key repeats, the last value wins.
/// A value that starts with `-` must use the `--key=value` form.
///
/// # Priority
///
/// Command-line arguments have the highest priority (3), which means they override
/// both environment variables (priority 2) and configuration files (priority 1).
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::CommandLineAdapter;
/// use configdef::domain::ConfigValue;
/// use configdef::ports::ConfigSource;
///
/// let adapter = CommandLineAdapter::from_args(vec!["--database.host=localhost", "--port", "5432", "--debug"]);
/// let props = adapter.properties().unwrap();
/// assert_eq!(props.get("port"), Some(&ConfigValue::from("5432")));
/// assert_eq!(props.get("debug"), Some(&ConfigValue::from("true")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Parsed configuration values
    values: HashMap<String, String>,
}

impl CommandLineAdapter {
    /// Creates a new command-line adapter with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new command-line adapter from a vector of arguments.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        let mut adapter = Self::new();
        adapter.parse_args(&args);
        adapter
    }

    /// Creates a new command-line adapter from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name) and parses the rest.
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }

    /// Parses command-line arguments and populates the values map.
    fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) {
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();
            let next: Option<&str> = args.get(i + 1).map(|s| s.as_ref());
            i += 1;

            if let Some(long) = arg.strip_prefix("--") {
                if long.is_empty() {
                    continue;
                }
                if let Some((key, value)) = long.split_once('=') {
                    self.values.insert(key.to_string(), value.to_string());
                } else if let Some(value) = next.filter(|v| !v.starts_with('-')) {
                    self.values.insert(long.to_string(), value.to_string());
                    i += 1;
                } else {
                    self.values.insert(long.to_string(), "true".to_string());
                }
            } else if let Some(short) = arg.strip_prefix('-').filter(|s| s.chars().count() == 1) {
                if let Some(value) = next.filter(|v| !v.starts_with('-')) {
                    self.values.insert(short.to_string(), value.to_string());
                    i += 1;
                }
            }
        }

        tracing::debug!("Parsed {} command-line properties", self.values.len());
    }
}

impl ConfigSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn properties(&self) -> Result<HashMap<String, ConfigValue>> {
        Ok(self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), ConfigValue::from(v.as_str())))
            .collect())
    }
}
