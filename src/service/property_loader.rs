// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merging raw properties from several sources.

use crate::domain::{ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::BTreeMap;

/// Collects raw properties from prioritized sources.
///
/// When several sources provide the same key, the source with the highest
/// priority wins; among sources of equal priority the one added first wins.
/// The merged properties are handed to [`ConfigDef::parse`](crate::service::ConfigDef::parse)
/// unchanged, so every key from every source must be defined there.
///
/// # Examples
///
/// ```rust
/// use configdef::domain::ConfigType;
/// use configdef::service::{ConfigDef, PropertyLoader};
///
/// # fn main() -> configdef::domain::Result<()> {
/// let mut def = ConfigDef::new();
/// def.define("port", ConfigType::Int, 8080)?;
///
/// let loader = PropertyLoader::new().with_cli_args(vec!["--port=9090"]);
/// let values = def.load(&loader)?;
/// assert_eq!(values.get_int("port"), Some(9090));
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct PropertyLoader {
    /// Sources in priority order (highest first)
    sources: Vec<Box<dyn ConfigSource>>,
}

impl PropertyLoader {
    /// Creates a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source.
    ///
    /// Sources are kept sorted by priority after being added.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
        self.sources
            .sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Adds a source and returns the loader.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.add_source(source);
        self
    }

    /// Adds environment variables starting with `prefix`, as lowercase dotted keys.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(
            EnvVarAdapter::with_prefix(prefix).lowercase_keys(true),
        ))
    }

    /// Adds command-line arguments.
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineAdapter;
        self.with_source(Box::new(CommandLineAdapter::from_args(args)))
    }

    /// Adds a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Returns the source names in the order they are consulted.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Merges the properties of every source.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a source.
    pub fn load(&self) -> Result<BTreeMap<String, ConfigValue>> {
        let mut merged = BTreeMap::new();
        for source in &self.sources {
            let properties = source.properties()?;
            tracing::debug!(
                "Source '{}' provided {} properties",
                source.name(),
                properties.len()
            );
            for (key, value) in properties {
                merged.entry(key).or_insert(value);
            }
        }
        Ok(merged)
    }
}
