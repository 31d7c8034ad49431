use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{OsbError, OsbResult},
    validate::assert_in_range,
};

/// Interpolation curve of a timed command.
///
/// Discriminants are the curve IDs understood by the osu! client and are what
/// gets written into command lines.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Easing {
    #[default]
    Linear = 0,
    EasingOut = 1,
    EasingIn = 2,
    QuadIn = 3,
    QuadOut = 4,
    QuadInOut = 5,
    CubicIn = 6,
    CubicOut = 7,
    CubicInOut = 8,
    QuartIn = 9,
    QuartOut = 10,
    QuartInOut = 11,
    QuintIn = 12,
    QuintOut = 13,
    QuintInOut = 14,
    SineIn = 15,
    SineOut = 16,
    SineInOut = 17,
    ExpoIn = 18,
    ExpoOut = 19,
    ExpoInOut = 20,
    CircIn = 21,
    CircOut = 22,
    CircInOut = 23,
    ElasticIn = 24,
    ElasticOut = 25,
    ElasticHalfOut = 26,
    ElasticQuarterOut = 27,
    ElasticInOut = 28,
    BackIn = 29,
    BackOut = 30,
    BackInOut = 31,
    BounceIn = 32,
    BounceOut = 33,
    BounceInOut = 34,
}

impl Easing {
    /// Every curve, ordered by client ID.
    pub const ALL: [Easing; 35] = [
        Self::Linear,
        Self::EasingOut,
        Self::EasingIn,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::QuintIn,
        Self::QuintOut,
        Self::QuintInOut,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticHalfOut,
        Self::ElasticQuarterOut,
        Self::ElasticInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
    ];

    /// Client curve ID.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a curve by client ID.
    pub fn from_code(code: i64) -> OsbResult<Self> {
        assert_in_range(code, 0..=34, "easing")?;
        // `ALL` is indexed by ID.
        Ok(Self::ALL[code as usize])
    }

    /// Variant name, as accepted by [`FromStr`].
    pub fn name(self) -> String {
        format!("{self:?}")
    }
}

impl FromStr for Easing {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| {
                OsbError::invalid_value(format!(
                    "Parameter easing expects a known easing name, got {s:?} instead."
                ))
            })
    }
}

/// Renders the client ID.
impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
