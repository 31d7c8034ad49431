use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{
    error::{OsbError, OsbResult},
    validate::assert_in_range,
};

/// Tolerance used by every fuzzy float comparison in the crate.
pub const EPSILON: f64 = 1e-8;

/// Return `true` when `a` and `b` differ by less than [`EPSILON`].
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A 2D point or vector in osu! playfield pixels.
///
/// Equality is tolerance based (see [`EPSILON`]), so `Vector2` is
/// `PartialEq` only.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vector2 {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from a packed `[x, y]` slice.
    pub fn from_slice(values: &[f64]) -> OsbResult<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(OsbError::invalid_value(format!(
                "a Vector2 needs exactly 2 numbers, got {}",
                values.len()
            ))),
        }
    }

    /// Component-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Coordinates as `[x, y]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        fuzzy_eq(self.x, other.x) && fuzzy_eq(self.y, other.y)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Renders as the comma-separated `x,y` pair used in command lines.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// An 8-bit RGB color. Equality is exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white, the client's neutral tint.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color, checking each channel lies in `[0, 255]`.
    pub fn new(r: i64, g: i64, b: i64) -> OsbResult<Self> {
        Ok(Self {
            r: channel(r, "r")?,
            g: channel(g, "g")?,
            b: channel(b, "b")?,
        })
    }

    /// Build a color from a packed `[r, g, b]` slice.
    pub fn from_slice(values: &[i64]) -> OsbResult<Self> {
        match values {
            [r, g, b] => Self::new(*r, *g, *b),
            _ => Err(OsbError::invalid_value(format!(
                "a Color needs exactly 3 integers, got {}",
                values.len()
            ))),
        }
    }

    /// Decode `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> OsbResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OsbError::invalid_value(format!(
                "Parameter hex expects #RRGGBB or RRGGBB, got {hex:?} instead."
            )));
        }
        let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (pair(0), pair(2), pair(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(OsbError::invalid_value(format!("invalid hex {hex:?}"))),
        }
    }

    /// Convert hue (degrees, `0..=360`), saturation and lightness (percent,
    /// `0..=100`) to RGB.
    pub fn from_hsl(h: i64, s: i64, l: i64) -> OsbResult<Self> {
        assert_in_range(h, 0..=360, "h")?;
        assert_in_range(s, 0..=100, "s")?;
        assert_in_range(l, 0..=100, "l")?;

        let h = h as f64 / 360.0;
        let s = s as f64 / 100.0;
        let l = l as f64 / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Ok(Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        })
    }
}

fn channel(v: i64, name: &str) -> OsbResult<u8> {
    assert_in_range(v, 0..=255, name)?;
    // In range, so the narrowing is lossless.
    Ok(v as u8)
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl TryFrom<[i64; 3]> for Color {
    type Error = OsbError;

    fn try_from([r, g, b]: [i64; 3]) -> OsbResult<Self> {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = OsbError;

    fn from_str(s: &str) -> OsbResult<Self> {
        Self::from_hex(s)
    }
}

/// Renders as the comma-separated `r,g,b` triple used in command lines.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
