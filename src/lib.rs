//! `osb` builds osu! storyboards and writes them as `.osb` text.
//!
//! A storyboard is a set of objects (sprites, animations, background images,
//! videos and audio samples) sorted into five rendering layers. Sprites and
//! animations carry timed commands (fade, move, scale, rotate, color, flip,
//! blending) and at most one trigger block.
//!
//! # Pipeline overview
//!
//! 1. **Build**: construct objects through validated constructors and append
//!    commands through the [`Commandable`] trait. Every call validates its
//!    inputs and encodes exactly one compact command line.
//! 2. **Collect**: add objects and nested [`Group`]s to a [`Storyboard`]; each
//!    object lands in its layer bucket, keeping insertion order.
//! 3. **Serialize**: [`Storyboard::to_text`] writes the `[Events]` document
//!    with its seven fixed sections.
//! 4. **Place** (optional): [`write_storyboard`] writes a `.osb` sidecar or
//!    splices the document into an existing `.osu` beatmap.
//!
//! Scripts in JSON form ([`parse_script`], [`load_script`]) drive the same
//! builder API and report failures with the JSON path of the offending node.
//!
//! ```
//! use osb::{Commandable, Layer, Origin, Sprite, Storyboard, Timing};
//!
//! let mut dot = Sprite::new(Layer::Foreground, Origin::Centre, "sb/dot.png", None)?;
//! dot.fade(Timing::span(0, 1000), 0.0, Some(1.0))?;
//!
//! let storyboard = Storyboard::new() << dot;
//! assert!(storyboard.to_text().contains("\n F,0,0,1000,0,1\n"));
//! # Ok::<(), osb::OsbError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves.
pub mod animation;
/// Command arguments, encoding and the [`Commandable`] trait.
pub mod command;
/// Vectors, colors, units, errors and validation.
pub mod foundation;
/// Storyboard objects.
pub mod object;
/// Writing documents to disk.
pub mod output;
/// Groups, layer buckets and the storyboard serializer.
pub mod scene;
/// JSON authoring scripts.
pub mod script;

pub use animation::ease::Easing;
pub use command::args::{Flip, ScaleValue, Timing};
pub use command::commandable::Commandable;
pub use command::list::{CommandList, TriggerState};
pub use foundation::core::{Color, Vector2};
pub use foundation::error::{OsbError, OsbResult};
pub use foundation::units::{Degrees, Milliseconds, Percent, Seconds};
pub use object::event::{Background, BackgroundEvent, Sample, Video};
pub use object::kinds::{Layer, LoopType, Origin, TriggerCondition};
pub use object::visual::{Animation, Sprite, VisualObject};
pub use output::placement::{splice_into_osu, write_storyboard};
pub use scene::group::{Group, Node};
pub use scene::layers::LayerBuckets;
pub use scene::storyboard::{LineEnding, RenderOptions, Storyboard};
pub use script::loader::{build_storyboard, load_script, parse_script};
