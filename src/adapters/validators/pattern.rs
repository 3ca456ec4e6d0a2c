// SPDX-License-Identifier: MIT OR Apache-2.0

//! Regular-expression validator for string values.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::Validator;
use regex::Regex;

/// Accepts strings that match a regular expression in full.
///
/// The pattern is compiled once, anchored at both ends, so a match anywhere
/// inside a longer string does not count. Non-string values are rejected.
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::validators::RegexValidator;
/// use configdef::domain::ConfigValue;
/// use configdef::ports::Validator;
///
/// # fn main() -> configdef::domain::Result<()> {
/// let validator = RegexValidator::new("[0-9A-Za-z]{5,10}")?;
/// assert!(validator.verify("username", &ConfigValue::from("abc123")).is_ok());
/// assert!(validator.verify("username", &ConfigValue::from("abc")).is_err());
/// assert!(validator.verify("username", &ConfigValue::from("abc!@111")).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RegexValidator {
    pattern: String,
    regex: Regex,
}

impl RegexValidator {
    /// Compiles `pattern` into a validator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidArgument` if the pattern does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ConfigError::InvalidArgument {
                message: format!("invalid pattern {:?}: {}", pattern, e),
            }
        })?;
        Ok(RegexValidator { pattern, regex })
    }

    /// Returns the pattern as supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validator for RegexValidator {
    fn verify(&self, name: &str, value: &ConfigValue) -> Result<()> {
        match value {
            ConfigValue::Text(s) if self.regex.is_match(s) => Ok(()),
            ConfigValue::Text(s) => Err(ConfigError::validation(
                name,
                format!("{:?} does not match {}", s, self.pattern),
            )),
            other => Err(ConfigError::validation(
                name,
                format!(
                    "only strings matching {} are allowed, got {}",
                    self.pattern, other
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    const USERNAME: &str = "^[0-9A-Za-z]{5,10}$";

    #[test]
    fn test_full_match() {
        let validator = RegexValidator::new(USERNAME).unwrap();
        assert!(validator.verify("username", &ConfigValue::from("abc123")).is_ok());
        assert!(validator.verify("username", &ConfigValue::from("abcde")).is_ok());
    }

    #[test]
    fn test_too_short() {
        let validator = RegexValidator::new(USERNAME).unwrap();
        let err = validator
            .verify("username", &ConfigValue::from("abc"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert_eq!(err.key(), Some("username"));
    }

    #[test]
    fn test_illegal_characters() {
        let validator = RegexValidator::new(USERNAME).unwrap();
        assert!(validator
            .verify("username", &ConfigValue::from("abc!@111"))
            .is_err());
    }

    #[test]
    fn test_unanchored_pattern_requires_full_match() {
        let validator = RegexValidator::new("[a-z]+").unwrap();
        assert!(validator.verify("k", &ConfigValue::from("abc")).is_ok());
        assert!(validator.verify("k", &ConfigValue::from("abc1")).is_err());
        assert!(validator.verify("k", &ConfigValue::from("1abc")).is_err());
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let validator = RegexValidator::new("dev|prod").unwrap();
        assert!(validator.verify("env", &ConfigValue::from("prod")).is_ok());
        assert!(validator.verify("env", &ConfigValue::from("devx")).is_err());
        assert!(validator.verify("env", &ConfigValue::from("xprod")).is_err());
    }

    #[test]
    fn test_non_string_rejected() {
        let validator = RegexValidator::new(USERNAME).unwrap();
        let err = validator
            .verify("username", &ConfigValue::Int(12345))
            .unwrap_err();
        assert!(err.to_string().contains(USERNAME));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexValidator::new("(unclosed").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_pattern_accessor() {
        let validator = RegexValidator::new(USERNAME).unwrap();
        assert_eq!(validator.pattern(), USERNAME);
    }
}
