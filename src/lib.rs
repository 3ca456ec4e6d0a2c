// SPDX-License-Identifier: MIT OR Apache-2.0

//! A schema-driven configuration definition and validation crate.
//!
//! Keys are registered up front with a declared type, a default value and an
//! optional validator. A set of raw properties (usually strings read from a file,
//! the environment or the command line) is then parsed against those definitions
//! into typed values.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`ConfigType`, `ConfigValue`, `ConfigKey`,
//!   the coercion table, errors)
//! - **Ports**: Trait definitions that define interfaces (`Validator`, `ConfigSource`,
//!   `ConfigParser`)
//! - **Adapters**: Reference validators and property sources (env vars, YAML, CLI)
//! - **Service**: The `ConfigDef` registry and the `PropertyLoader`
//!
//! # Parsing rules
//!
//! - A raw key that is not defined fails the whole parse.
//! - A raw value that cannot be coerced to the key's type is replaced by the
//!   key's default, with a warning logged through `tracing`.
//! - A key's validator sees the raw value as submitted; a rejection fails the
//!   whole parse.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `env`: Enable environment variable support (default)
//! - `cli`: Enable command-line argument support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use configdef::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut def = ConfigDef::new();
//! def.define("server.port", ConfigType::Int, 8080)?
//!     .define("server.debug", ConfigType::Bool, false)?
//!     .define_validated("pool.size", ConfigType::Int, 10, IntRangeValidator::new(1, 64))?;
//!
//! let values = def.parse([
//!     ("server.port", "9090"),
//!     ("server.debug", "TRUE"),
//!     ("pool.size", "32"),
//! ])?;
//!
//! assert_eq!(values.get_int("server.port"), Some(9090));
//! assert_eq!(values.get_bool("server.debug"), Some(true));
//! assert_eq!(values.get_int("pool.size"), Some(32));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{IntRangeValidator, RegexValidator};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigType, ConfigValue, ErrorKind, Result, TypedValues,
    };
    pub use crate::ports::{ConfigParser, ConfigSource, Validator};
    pub use crate::service::{ConfigDef, PropertyLoader};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
