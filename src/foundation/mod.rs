//! Value types, validation and errors shared by every other module.

/// `Vector2` and `Color` value types.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Unit-conversion wrappers.
pub mod units;
/// Assertion primitives.
pub mod validate;
