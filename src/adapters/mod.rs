// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the reference validators and the property sources.
//! Each source implements the `ConfigSource` trait to provide raw properties
//! from a specific place.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub mod validators;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use validators::{IntRangeValidator, RegexValidator};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
