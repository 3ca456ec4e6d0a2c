// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inclusive integer range validator.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::Validator;

/// Accepts 32-bit integers within `[min, max]`.
///
/// `Int` values are checked directly. A `Text` value is parsed as a base-10
/// `i32` first, so the validator can run against raw properties before they
/// are coerced. Any other value, `Long` included, is rejected.
///
/// # Examples
///
/// ```rust
/// use configdef::adapters::validators::IntRangeValidator;
/// use configdef::domain::ConfigValue;
/// use configdef::ports::Validator;
///
/// let validator = IntRangeValidator::new(1, 100);
/// assert!(validator.verify("limit.max", &ConfigValue::from(100)).is_ok());
/// assert!(validator.verify("limit.max", &ConfigValue::from("1")).is_ok());
/// assert!(validator.verify("limit.max", &ConfigValue::from("-1")).is_err());
/// assert!(validator.verify("limit.max", &ConfigValue::from(50i64)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntRangeValidator {
    min: i32,
    max: i32,
}

impl IntRangeValidator {
    /// Creates a validator accepting `min <= v <= max`.
    pub fn new(min: i32, max: i32) -> Self {
        IntRangeValidator { min, max }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    fn check_bounds(&self, name: &str, v: i32) -> Result<()> {
        if v < self.min || v > self.max {
            return Err(ConfigError::validation(
                name,
                format!(
                    "value {} is not between {} and {}",
                    v, self.min, self.max
                ),
            ));
        }
        Ok(())
    }
}

impl Validator for IntRangeValidator {
    fn verify(&self, name: &str, value: &ConfigValue) -> Result<()> {
        match value {
            ConfigValue::Int(v) => self.check_bounds(name, *v),
            ConfigValue::Text(s) => {
                let v = s.parse::<i32>().map_err(|_| {
                    ConfigError::validation(name, format!("{:?} is not an integer", s))
                })?;
                self.check_bounds(name, v)
            }
            other => Err(ConfigError::validation(
                name,
                format!(
                    "expected an integer between {} and {}, got {}",
                    self.min, self.max, other
                ),
            )),
        }
    }
}
