// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator trait definition.
//!
//! A validator accepts or rejects a single value on behalf of a named key. The
//! registry runs it once against a key's default when the key is defined, and
//! again against each raw value submitted for that key at parse time.

use crate::domain::{ConfigValue, Result};
use std::fmt;

/// A pluggable check applied to configuration values.
///
/// Implementations hold their own configuration (bounds, compiled patterns, ...)
/// and must not keep per-call state, so one instance can be shared across keys
/// and threads.
///
/// # Examples
///
/// ```rust
/// use configdef::domain::{ConfigError, ConfigValue, Result};
/// use configdef::ports::Validator;
///
/// #[derive(Debug)]
/// struct NonEmpty;
///
/// impl Validator for NonEmpty {
///     fn verify(&self, name: &str, value: &ConfigValue) -> Result<()> {
///         match value.as_text() {
///             Some(s) if !s.is_empty() => Ok(()),
///             _ => Err(ConfigError::validation(name, "must be a non-empty string")),
///         }
///     }
/// }
///
/// assert!(NonEmpty.verify("app.name", &ConfigValue::from("demo")).is_ok());
/// assert!(NonEmpty.verify("app.name", &ConfigValue::from("")).is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Checks `value` on behalf of the key called `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The value is acceptable
    /// * `Err(ConfigError::ValidationFailed)` - The value was rejected; the error
    ///   names the key and the reason
    fn verify(&self, name: &str, value: &ConfigValue) -> Result<()>;
}
