use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    object::kinds::Layer,
    scene::{
        group::{Group, Node},
        layers::LayerBuckets,
    },
};

/// Section header opening the document.
pub const EVENTS_HEADER: &str = "[Events]";
/// Comment line preceding background and video lines.
pub const BACKGROUND_HEADER: &str = "//Background and Video events";
/// Comment line preceding audio samples.
pub const SAMPLES_HEADER: &str = "//Storyboard Sound Samples";

/// Line terminator written after every output line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator bytes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Knobs for serialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Terminator for every line, including the last.
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl RenderOptions {
    /// Options with CRLF line endings.
    pub fn crlf() -> Self {
        Self {
            line_ending: LineEnding::CrLf,
        }
    }
}

/// The root container, serializable to `.osb` text.
///
/// A storyboard behaves like a [`Group`] with a serializer on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Storyboard {
    root: Group,
}

impl Storyboard {
    /// An empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object or group, returning `self` for chaining.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.root.add(node);
        self
    }

    /// Sorted contents.
    pub fn buckets(&self) -> &LayerBuckets {
        self.root.buckets()
    }

    /// Serialize with LF line endings.
    pub fn to_text(&self) -> String {
        self.to_text_with(&RenderOptions::default())
    }

    /// Serialize the full `[Events]` document.
    ///
    /// Section order is fixed: background and video lines, layers 0 to 4 in
    /// index order, then samples. Headers are written even for empty
    /// sections.
    #[tracing::instrument(skip_all, fields(line_ending = ?opts.line_ending))]
    pub fn to_text_with(&self, opts: &RenderOptions) -> String {
        let eol = opts.line_ending.as_str();
        let buckets = self.root.buckets();
        let mut out = String::new();
        let mut line_count = 0usize;
        let mut push = |line: &str| {
            out.push_str(line);
            out.push_str(eol);
            line_count += 1;
        };

        push(EVENTS_HEADER);

        push(BACKGROUND_HEADER);
        for event in buckets.background_and_video() {
            push(&event.line());
        }

        for layer in Layer::ALL {
            push(&layer_header(layer));
            for object in buckets.layer(layer) {
                push(&object.header());
                for line in object.command_lines() {
                    push(line);
                }
            }
        }

        push(SAMPLES_HEADER);
        for sample in buckets.samples() {
            push(&sample.line());
        }

        tracing::debug!(
            lines = line_count,
            bytes = out.len(),
            "serialized storyboard"
        );
        out
    }
}

/// `//Storyboard Layer <index> (<name>)`
pub fn layer_header(layer: Layer) -> String {
    format!("//Storyboard Layer {} ({})", layer.index(), layer.as_str())
}

impl<T: Into<Node>> std::ops::Shl<T> for Storyboard {
    type Output = Storyboard;

    fn shl(mut self, rhs: T) -> Storyboard {
        self.add(rhs);
        self
    }
}

impl<T: Into<Node>> std::ops::ShlAssign<T> for Storyboard {
    fn shl_assign(&mut self, rhs: T) {
        self.add(rhs);
    }
}

impl fmt::Display for Storyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/storyboard.rs"]
mod tests;
