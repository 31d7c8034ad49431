//! Interpolation curves.

/// Client easing IDs.
pub mod ease;
