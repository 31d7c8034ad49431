use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{OsbError, OsbResult},
    validate::not_one_of,
};

/// Rendering layer of a storyboard object, back to front.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Layer {
    /// Behind everything else.
    #[default]
    Background,
    /// Shown only while the player is failing.
    Fail,
    /// Shown only while the player is passing.
    Pass,
    /// In front of the pass/fail layers.
    Foreground,
    /// Above the gameplay elements.
    Overlay,
}

impl Layer {
    /// Layers in document order.
    pub const ALL: [Layer; 5] = [
        Self::Background,
        Self::Fail,
        Self::Pass,
        Self::Foreground,
        Self::Overlay,
    ];

    /// Name as written in object header lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Foreground => "Foreground",
            Self::Overlay => "Overlay",
        }
    }

    /// Position in [`Layer::ALL`], also the number in the section header.
    pub fn index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Fail => 1,
            Self::Pass => 2,
            Self::Foreground => 3,
            Self::Overlay => 4,
        }
    }

    /// Layer index used by `Sample` lines. Samples cannot target `Overlay`.
    pub fn sample_index(self) -> OsbResult<u8> {
        match self {
            Self::Background => Ok(0),
            Self::Foreground => Ok(1),
            Self::Fail => Ok(2),
            Self::Pass => Ok(3),
            Self::Overlay => Err(OsbError::invalid_value(
                "Parameter layer expects Background or Foreground or Fail or Pass \
                 for an audio sample, got Overlay instead.",
            )),
        }
    }
}

impl FromStr for Layer {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| not_one_of(&s, &Self::ALL.map(Self::as_str), "layer"))
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor point of an image, relative to which it is positioned, scaled and
/// rotated.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Origin {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    #[serde(alias = "TopCenter")]
    TopCentre,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    #[serde(alias = "CenterLeft")]
    CentreLeft,
    /// Center of the image.
    #[default]
    #[serde(alias = "Center")]
    Centre,
    /// Middle of the right edge.
    #[serde(alias = "CenterRight")]
    CentreRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    #[serde(alias = "BottomCenter")]
    BottomCentre,
    /// Bottom-right corner.
    BottomRight,
}

impl Origin {
    /// Every anchor, in canonical order.
    pub const ALL: [Origin; 9] = [
        Self::TopLeft,
        Self::TopCentre,
        Self::TopRight,
        Self::CentreLeft,
        Self::Centre,
        Self::CentreRight,
        Self::BottomLeft,
        Self::BottomCentre,
        Self::BottomRight,
    ];

    /// Canonical (British) spelling written into header lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "TopLeft",
            Self::TopCentre => "TopCentre",
            Self::TopRight => "TopRight",
            Self::CentreLeft => "CentreLeft",
            Self::Centre => "Centre",
            Self::CentreRight => "CentreRight",
            Self::BottomLeft => "BottomLeft",
            Self::BottomCentre => "BottomCentre",
            Self::BottomRight => "BottomRight",
        }
    }
}

/// Accepts both `Centre` and `Center` spellings.
impl FromStr for Origin {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        let canonical = s.replace("Center", "Centre");
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == canonical)
            .ok_or_else(|| not_one_of(&s, &Self::ALL.map(Self::as_str), "origin"))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback mode of an [`crate::Animation`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LoopType {
    /// Restart from the first frame after the last one.
    #[default]
    LoopForever,
    /// Stop on the last frame.
    LoopOnce,
}

impl LoopType {
    /// Name as written in the animation header.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoopForever => "LoopForever",
            Self::LoopOnce => "LoopOnce",
        }
    }
}

impl FromStr for LoopType {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        match s {
            "LoopForever" => Ok(Self::LoopForever),
            "LoopOnce" => Ok(Self::LoopOnce),
            _ => Err(not_one_of(&s, &["LoopForever", "LoopOnce"], "loop_type")),
        }
    }
}

impl fmt::Display for LoopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gameplay condition that activates a trigger block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TriggerCondition {
    /// The player transitions into a passing state.
    Passing,
    /// The player transitions into a failing state.
    Failing,
}

impl TriggerCondition {
    /// Name as written in the trigger marker line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passing => "Passing",
            Self::Failing => "Failing",
        }
    }
}

impl FromStr for TriggerCondition {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        match s {
            "Passing" => Ok(Self::Passing),
            "Failing" => Ok(Self::Failing),
            _ => Err(not_one_of(&s, &["Passing", "Failing"], "on")),
        }
    }
}

impl fmt::Display for TriggerCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/kinds.rs"]
mod tests;
