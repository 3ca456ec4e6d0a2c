// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration definition crate.
//!
//! Every failure raised while defining keys, coercing values, validating them, or
//! loading raw properties is a [`ConfigError`]. Callers that only care about the
//! category of a failure can match on [`ConfigError::kind`].

use crate::domain::config_type::ConfigType;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use configdef::domain::errors::{ConfigError, ErrorKind};
///
/// let error = ConfigError::UnknownKey {
///     key: "database.host".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::UnknownKey);
/// assert_eq!(error.key(), Some("database.host"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required argument to `define` was missing or blank.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// A key with the same name is already registered.
    #[error("Configuration key '{key}' is already defined")]
    DuplicateKey {
        /// The name that collided
        key: String,
    },

    /// A value could not be coerced to the declared type.
    #[error("Configuration value {value} for key '{key}' is not convertible to {expected}")]
    TypeMismatch {
        /// The key being coerced
        key: String,
        /// The declared type
        expected: ConfigType,
        /// Rendering of the rejected value
        value: String,
    },

    /// A raw property named a key that is not registered.
    #[error("Configuration key not found: {key}")]
    UnknownKey {
        /// The unregistered name
        key: String,
    },

    /// A validator rejected a value.
    #[error("Validation failed for key '{key}': {message}")]
    ValidationFailed {
        /// The key being validated
        key: String,
        /// The validator's reason
        message: String,
    },

    /// An error occurred in a property source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The category of a [`ConfigError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ConfigError::InvalidArgument`].
    InvalidArgument,
    /// See [`ConfigError::DuplicateKey`].
    DuplicateKey,
    /// See [`ConfigError::TypeMismatch`].
    TypeMismatch,
    /// See [`ConfigError::UnknownKey`].
    UnknownKey,
    /// See [`ConfigError::ValidationFailed`].
    ValidationFailed,
    /// See [`ConfigError::SourceError`].
    Source,
    /// See [`ConfigError::ParseError`].
    Parse,
    /// See [`ConfigError::IoError`].
    Io,
}

impl ConfigError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ConfigError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            ConfigError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ConfigError::UnknownKey { .. } => ErrorKind::UnknownKey,
            ConfigError::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            ConfigError::SourceError { .. } => ErrorKind::Source,
            ConfigError::ParseError { .. } => ErrorKind::Parse,
            ConfigError::IoError(_) => ErrorKind::Io,
        }
    }

    /// Returns the configuration key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::DuplicateKey { key }
            | ConfigError::TypeMismatch { key, .. }
            | ConfigError::UnknownKey { key }
            | ConfigError::ValidationFailed { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Creates a `ValidationFailed` error for the given key.
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = ConfigError::InvalidArgument {
            message: "name should not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument: name should not be blank"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.key(), None);
    }

    #[test]
    fn test_duplicate_key_error() {
        let error = ConfigError::DuplicateKey {
            key: "a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration key 'a' is already defined"
        );
        assert_eq!(error.key(), Some("a"));
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: "server.port".to_string(),
            expected: ConfigType::Int,
            value: "\"abc\"".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("server.port"));
        assert!(message.contains("int"));
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_unknown_key_error() {
        let error = ConfigError::UnknownKey {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
    }

    #[test]
    fn test_validation_helper() {
        let error = ConfigError::validation("limit.max", "must be between 1 and 100");
        assert_eq!(error.kind(), ErrorKind::ValidationFailed);
        assert_eq!(
            error.to_string(),
            "Validation failed for key 'limit.max': must be between 1 and 100"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "env".to_string(),
            message: "Failed to read environment".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'env' error: Failed to read environment"
        );
        assert_eq!(error.kind(), ErrorKind::Source);
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
        assert_eq!(error.kind(), ErrorKind::Io);
    }
}
