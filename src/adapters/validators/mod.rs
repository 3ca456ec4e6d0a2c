// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference implementations of the `Validator` port.

pub mod pattern;
pub mod range;

pub use pattern::RegexValidator;
pub use range::IntRangeValidator;
