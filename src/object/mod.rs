//! Storyboard objects and the enumerations describing them.

/// Single-line objects: background, video, sample.
pub mod event;
/// Layer, origin, loop and trigger enumerations.
pub mod kinds;
/// Objects with command lists: sprite, animation.
pub mod visual;
