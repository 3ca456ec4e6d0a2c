// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the type catalog, the value representation, key records,
//! the coercion table and the error taxonomy. It has no knowledge of where raw
//! properties come from.

pub mod coercion;
pub mod config_key;
pub mod config_type;
pub mod config_value;
pub mod errors;
pub mod typed_values;

// Re-export commonly used types
pub use coercion::{CoercionTable, Converter};
pub use config_key::ConfigKey;
pub use config_type::ConfigType;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, ErrorKind, Result};
pub use typed_values::TypedValues;
