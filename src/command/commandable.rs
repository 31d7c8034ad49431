use crate::{
    command::{
        args::{Flip, ScaleValue, Timing},
        encode,
        list::CommandList,
    },
    foundation::{
        core::{Color, Vector2},
        error::OsbResult,
    },
    object::kinds::TriggerCondition,
};

/// Timed-effect operations of a storyboard object.
///
/// Implementors only expose their [`CommandList`]; every operation is a
/// provided method that checks the list still accepts commands, validates and
/// encodes its inputs, then appends exactly one line. On error the list is
/// left untouched.
///
/// ```
/// use osb::{Commandable, Easing, Layer, Origin, Sprite, Timing, Vector2};
///
/// let mut star = Sprite::new(Layer::Foreground, Origin::Centre, "sb/star.png", None)?;
/// star.fade(Timing::span(0, 500), 0.0, Some(1.0))?
///     .move_to(
///         Timing::span(0, 1000).with_easing(Easing::SineOut),
///         Vector2::new(320.0, 480.0),
///         Some(Vector2::new(320.0, 240.0)),
///     )?;
/// assert_eq!(star.commands().lines()[0], " F,0,0,500,0,1");
/// # Ok::<(), osb::OsbError>(())
/// ```
pub trait Commandable {
    /// The object's command list.
    fn commands(&self) -> &CommandList;

    /// Mutable access to the object's command list.
    fn commands_mut(&mut self) -> &mut CommandList;

    /// Change the opacity; opacities lie in `[0, 1]`.
    fn fade(
        &mut self,
        timing: Timing,
        start_opacity: f64,
        end_opacity: Option<f64>,
    ) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::fade(&timing, start_opacity, end_opacity)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Move to a position in playfield pixels.
    fn move_to(
        &mut self,
        timing: Timing,
        start_position: impl Into<Vector2>,
        end_position: Option<Vector2>,
    ) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::move_to(&timing, start_position.into(), end_position)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Move along the x axis only.
    fn move_x(&mut self, timing: Timing, start_x: f64, end_x: Option<f64>) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::move_x(&timing, start_x, end_x)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Move along the y axis only.
    fn move_y(&mut self, timing: Timing, start_y: f64, end_y: Option<f64>) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::move_y(&timing, start_y, end_y)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Scale relative to the image size, around the origin.
    ///
    /// Uniform and per-axis factors cannot be mixed between start and end.
    fn scale(
        &mut self,
        timing: Timing,
        start_scale: impl Into<ScaleValue>,
        end_scale: Option<ScaleValue>,
    ) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::scale(&timing, start_scale.into(), end_scale)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Rotate around the origin; angles in radians.
    fn rotate(
        &mut self,
        timing: Timing,
        start_angle: f64,
        end_angle: Option<f64>,
    ) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::rotate(&timing, start_angle, end_angle)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Tint the image. White leaves it unchanged.
    ///
    /// `start_color` also accepts `[r, g, b]`.
    fn color(
        &mut self,
        timing: Timing,
        start_color: impl Into<Color>,
        end_color: Option<Color>,
    ) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::color(&timing, start_color.into(), end_color)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Mirror the image along one axis between `start_time` and `end_time`.
    fn flip(&mut self, start_time: i32, end_time: i32, direction: Flip) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::flip(start_time, end_time, direction)?;
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Use additive blending instead of alpha blending between `start_time`
    /// and `end_time`.
    fn additive_color_blending(&mut self, start_time: i32, end_time: i32) -> OsbResult<&mut Self> {
        self.commands().ensure_open()?;
        let body = encode::additive_color_blending(start_time, end_time);
        self.commands_mut().append(body)?;
        Ok(self)
    }

    /// Record a block of commands that runs only when `on` happens between
    /// `start_time` and `end_time`.
    ///
    /// The trigger must be the first and only block of the object. Commands
    /// issued by `body` are nested inside it, and their times are relative to
    /// the moment the trigger fires. Once `body` returns the object is
    /// sealed. If `body` fails or adds nothing, the object is restored and the
    /// error returned.
    fn trigger<F>(
        &mut self,
        on: TriggerCondition,
        start_time: i32,
        end_time: i32,
        body: F,
    ) -> OsbResult<&mut Self>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> OsbResult<()>,
    {
        let mark = self.commands_mut().begin_trigger(on, start_time, end_time)?;
        let outcome = body(self);
        self.commands_mut().finish_trigger(mark, outcome)?;
        Ok(self)
    }
}

/// A bare list takes commands directly, without a header line. Sprites and
/// animations forward to the list they own.
impl Commandable for CommandList {
    fn commands(&self) -> &CommandList {
        self
    }

    fn commands_mut(&mut self) -> &mut CommandList {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/commandable.rs"]
mod tests;
