//! Writing documents to disk.

/// `.osb` sidecars and `.osu` splicing.
pub mod placement;
