//! JSON authoring scripts.
//!
//! A script is a JSON object with an `objects` array. Each entry names its
//! `type` (`background`, `video`, `sample`, `sprite`, `animation` or `group`)
//! and the constructor parameters of that object; sprites and animations may
//! carry a `commands` array whose entries are single-key objects such as
//! `{"fade": {"start_time": 0, "start_opacity": 1}}`. Groups nest their own
//! `objects` array.

/// Script parsing and storyboard construction.
pub mod loader;
