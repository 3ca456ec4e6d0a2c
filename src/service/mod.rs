// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the registry and the property loader.
//!
//! [`ConfigDef`] defines keys and parses raw properties into typed values.
//! [`PropertyLoader`] gathers raw properties from one or more sources.

pub mod config_def;
pub mod property_loader;

// Re-export commonly used types
pub use config_def::ConfigDef;
pub use property_loader::PropertyLoader;
