use crate::{
    animation::ease::Easing,
    foundation::{
        core::Vector2,
        error::{OsbError, OsbResult},
    },
};

/// Start time, optional end time and easing shared by the timed commands.
///
/// Times are integer milliseconds. A missing end time, or one equal to the
/// start, is written as an empty field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    /// When the command starts.
    pub start: i32,
    /// When the command ends; `None` for an instantaneous command.
    pub end: Option<i32>,
    /// Interpolation between the start and end values.
    pub easing: Easing,
}

impl Timing {
    /// An instantaneous command at `start`.
    pub fn at(start: impl Into<i32>) -> Self {
        Self {
            start: start.into(),
            end: None,
            easing: Easing::Linear,
        }
    }

    /// A command running from `start` to `end`.
    pub fn span(start: impl Into<i32>, end: impl Into<i32>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
            easing: Easing::Linear,
        }
    }

    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The end-time field: empty when redundant with the start.
    pub fn end_field(&self) -> String {
        match self.end {
            Some(end) if end != self.start => end.to_string(),
            _ => String::new(),
        }
    }

    /// `<easing>,<start>,<end>` prefix of a timed command.
    pub(crate) fn fields(&self) -> String {
        format!("{},{},{}", self.easing, self.start, self.end_field())
    }
}

/// Scale factor: uniform, or separate horizontal/vertical factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleValue {
    /// Same factor on both axes (`S` command).
    Uniform(f64),
    /// Per-axis factors (`V` command).
    Vector(Vector2),
}

impl From<f64> for ScaleValue {
    fn from(v: f64) -> Self {
        Self::Uniform(v)
    }
}

impl From<Vector2> for ScaleValue {
    fn from(v: Vector2) -> Self {
        Self::Vector(v)
    }
}

impl From<[f64; 2]> for ScaleValue {
    fn from(v: [f64; 2]) -> Self {
        Self::Vector(v.into())
    }
}

/// Direction of a flip command. Exactly one axis must be set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flip {
    /// Mirror left to right.
    pub horizontally: bool,
    /// Mirror top to bottom.
    pub vertically: bool,
}

impl Default for Flip {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl Flip {
    /// Horizontal flip.
    pub fn horizontal() -> Self {
        Self {
            horizontally: true,
            vertically: false,
        }
    }

    /// Vertical flip.
    pub fn vertical() -> Self {
        Self {
            horizontally: false,
            vertically: true,
        }
    }

    /// Parameter letter written into the `P` command.
    pub fn letter(self) -> OsbResult<char> {
        match (self.horizontally, self.vertically) {
            (true, false) => Ok('H'),
            (false, true) => Ok('V'),
            (true, true) => Err(OsbError::invalid_value(
                "cannot flip an object both horizontally and vertically",
            )),
            (false, false) => Err(OsbError::invalid_value("specify a direction to flip")),
        }
    }
}
