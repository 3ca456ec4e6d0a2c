// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) at the edges of the
//! registry: validators plugged into keys, and sources and parsers that supply
//! raw properties. Implementations live in the adapters layer.

pub mod parser;
pub mod source;
pub mod validator;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use source::ConfigSource;
pub use validator::Validator;
