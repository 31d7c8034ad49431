//! Unit wrappers for authoring code.
//!
//! Storyboard times are integer milliseconds, angles are radians and opacities
//! are fractions in `[0, 1]`. These newtypes make the conversions explicit at
//! call sites instead of relying on bare numbers.

use serde::{Deserialize, Serialize};

/// A timestamp or duration in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Milliseconds(pub i32);

impl Milliseconds {
    /// Raw millisecond count.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<Milliseconds> for i32 {
    fn from(ms: Milliseconds) -> Self {
        ms.0
    }
}

impl std::ops::Add for Milliseconds {
    type Output = Self;

    /// Saturates at the `i32` bounds.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// A duration in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Convert to milliseconds, rounding to the nearest integer.
    pub fn to_ms(self) -> Milliseconds {
        Milliseconds((self.0 * 1000.0).round() as i32)
    }
}

impl From<Seconds> for Milliseconds {
    fn from(s: Seconds) -> Self {
        s.to_ms()
    }
}

/// An angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians, the unit of the rotate command.
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

/// A percentage, `100` being the whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Percent(pub f64);

impl Percent {
    /// Convert to a fraction (`50%` -> `0.5`).
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
