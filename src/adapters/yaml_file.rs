// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file property source adapter.
//!
//! This module provides an adapter that reads raw properties from YAML files.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// YAML parser implementation.
///
/// Nested mappings are flattened into dot-notation keys. A sequence of scalars
/// becomes one comma-separated string, which is the shape the `List` coercion
/// expects. Sequences that contain mappings or sequences are flattened with
/// index keys (`servers.0.host`). Scalars become their string form and `null`
/// becomes an empty string.
///
/// A nested mapping always turns into dotted keys, never into one value. A key
/// declared as `Map` must therefore be written as a `"k:v, k2:v2"` string:
///
/// ```yaml
/// weights: "primary:3, replica:1"   # one Map-typed key
/// pool:                             # two keys, pool.min and pool.max
///   min: 1
///   max: 8
/// ```
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::YamlParser;
/// use configdef::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432\nhosts: [a, b]";
/// let result = parser.parse(yaml_content).unwrap();
/// assert_eq!(result.get("database.host"), Some(&"localhost".to_string()));
/// assert_eq!(result.get("hosts"), Some(&"a, b".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn scalar(value: &serde_yaml::Value) -> Option<String> {
        match value {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            serde_yaml::Value::Null => Some(String::new()),
            _ => None,
        }
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    let Some(key_str) = Self::scalar(key) else {
                        continue;
                    };
                    let new_prefix = if prefix.is_empty() {
                        key_str
                    } else {
                        format!("{}.{}", prefix, key_str)
                    };
                    Self::flatten_yaml(val, &new_prefix, result);
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                let scalars: Option<Vec<String>> = seq.iter().map(Self::scalar).collect();
                match scalars {
                    Some(items) => {
                        result.insert(prefix.to_string(), items.join(", "));
                    }
                    None => {
                        for (i, val) in seq.iter().enumerate() {
                            Self::flatten_yaml(val, &format!("{}.{}", prefix, i), result);
                        }
                    }
                }
            }
            serde_yaml::Value::Tagged(tagged) => Self::flatten_yaml(&tagged.value, prefix, result),
            other => {
                if let Some(s) = Self::scalar(other) {
                    result.insert(prefix.to_string(), s);
                }
            }
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        Self::flatten_yaml(&value, "", &mut result);
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Property source adapter for YAML files.
///
/// # Priority
///
/// YAML files have a priority of 1, which means they are overridden by both
/// environment variables (priority 2) and command-line arguments (priority 3).
///
/// # Examples
///
/// ```rust,no_run
/// use configdef::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/etc/myapp/config.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed configuration values
    values: HashMap<String, String>,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    ///
    /// The file is read and parsed immediately.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file cannot be read or is larger than 10MB,
    /// and `ParseError` if it is not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", &file_path, e))?;

        let values = YamlParser::new().parse(&read_limited(&canonical_path)?)?;
        tracing::debug!(
            "Loaded {} properties from {}",
            values.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            values,
        })
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn source_error(what: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("{}: {}", what, file_name(path)),
        source: Some(Box::new(e)),
    }
}

/// Reads a file after checking its size against `MAX_YAML_FILE_SIZE`.
fn read_limited(path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).map_err(|e| source_error("Failed to read file metadata", path, e))?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path)
        .map_err(|e| source_error("Failed to read configuration file", path, e))
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn properties(&self) -> Result<HashMap<String, ConfigValue>> {
        Ok(self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), ConfigValue::from(v.as_str())))
            .collect())
    }
}
