//! Containers and the document serializer.

/// Nestable object groups.
pub mod group;
/// Per-section object buckets.
pub mod layers;
/// The root storyboard and its text output.
pub mod storyboard;
