//! Compact encoding of single command lines, without indentation.
//!
//! Every encoder validates its inputs and returns the line body. End values
//! equal to the start value (tolerance compare for floats and vectors, exact
//! for colors) are omitted together with their separators.

use std::fmt::Display;

use crate::{
    command::args::{Flip, ScaleValue, Timing},
    foundation::{
        core::{Color, Vector2, fuzzy_eq},
        error::{OsbError, OsbResult},
        validate::{assert_finite, assert_in_range},
    },
    object::kinds::TriggerCondition,
};

fn line<S: Display, E: Display>(tag: &str, timing: &Timing, start: S, end: Option<E>) -> String {
    match end {
        Some(end) => format!("{tag},{},{start},{end}", timing.fields()),
        None => format!("{tag},{},{start}", timing.fields()),
    }
}

fn changed_f64(start: f64, end: Option<f64>) -> Option<f64> {
    end.filter(|e| !fuzzy_eq(start, *e))
}

fn finite_vector(v: Vector2, param: &str) -> OsbResult<()> {
    assert_finite(v.x, param)?;
    assert_finite(v.y, param)
}

/// `F,<easing>,<start>,<end>,<opacity>[,<end opacity>]`
pub fn fade(timing: &Timing, start_opacity: f64, end_opacity: Option<f64>) -> OsbResult<String> {
    assert_in_range(start_opacity, 0.0..=1.0, "start_opacity")?;
    if let Some(end) = end_opacity {
        assert_in_range(end, 0.0..=1.0, "end_opacity")?;
    }
    Ok(line(
        "F",
        timing,
        start_opacity,
        changed_f64(start_opacity, end_opacity),
    ))
}

/// `M,<easing>,<start>,<end>,<x>,<y>[,<end x>,<end y>]`
pub fn move_to(timing: &Timing, start: Vector2, end: Option<Vector2>) -> OsbResult<String> {
    finite_vector(start, "start_position")?;
    if let Some(end) = end {
        finite_vector(end, "end_position")?;
    }
    Ok(line("M", timing, start, end.filter(|e| *e != start)))
}

/// `MX,<easing>,<start>,<end>,<x>[,<end x>]`
pub fn move_x(timing: &Timing, start_x: f64, end_x: Option<f64>) -> OsbResult<String> {
    axis("MX", timing, start_x, end_x, "start_x", "end_x")
}

/// `MY,<easing>,<start>,<end>,<y>[,<end y>]`
pub fn move_y(timing: &Timing, start_y: f64, end_y: Option<f64>) -> OsbResult<String> {
    axis("MY", timing, start_y, end_y, "start_y", "end_y")
}

fn axis(
    tag: &str,
    timing: &Timing,
    start: f64,
    end: Option<f64>,
    start_param: &str,
    end_param: &str,
) -> OsbResult<String> {
    assert_finite(start, start_param)?;
    if let Some(end) = end {
        assert_finite(end, end_param)?;
    }
    Ok(line(tag, timing, start, changed_f64(start, end)))
}

/// `S,<easing>,<start>,<end>,<scale>[,<end scale>]` for uniform factors,
/// `V,<easing>,<start>,<end>,<x>,<y>[,<end x>,<end y>]` for per-axis factors.
///
/// Start and end must both be uniform or both be vectors.
pub fn scale(timing: &Timing, start: ScaleValue, end: Option<ScaleValue>) -> OsbResult<String> {
    match (start, end) {
        (ScaleValue::Uniform(s), None) => {
            assert_finite(s, "start_scale")?;
            Ok(line("S", timing, s, None::<f64>))
        }
        (ScaleValue::Uniform(s), Some(ScaleValue::Uniform(e))) => {
            assert_finite(s, "start_scale")?;
            assert_finite(e, "end_scale")?;
            Ok(line("S", timing, s, changed_f64(s, Some(e))))
        }
        (ScaleValue::Vector(s), None) => {
            finite_vector(s, "start_scale")?;
            Ok(line("V", timing, s, None::<Vector2>))
        }
        (ScaleValue::Vector(s), Some(ScaleValue::Vector(e))) => {
            finite_vector(s, "start_scale")?;
            finite_vector(e, "end_scale")?;
            Ok(line("V", timing, s, Some(e).filter(|e| *e != s)))
        }
        _ => Err(OsbError::invalid_value(
            "start_scale and end_scale must be either both numbers or both vectors",
        )),
    }
}

/// `R,<easing>,<start>,<end>,<radians>[,<end radians>]`
pub fn rotate(timing: &Timing, start_angle: f64, end_angle: Option<f64>) -> OsbResult<String> {
    axis(
        "R",
        timing,
        start_angle,
        end_angle,
        "start_angle",
        "end_angle",
    )
}

/// `C,<easing>,<start>,<end>,<r>,<g>,<b>[,<end r>,<end g>,<end b>]`
pub fn color(timing: &Timing, start: Color, end: Option<Color>) -> OsbResult<String> {
    Ok(line("C", timing, start, end.filter(|e| *e != start)))
}

/// `P,<start>,<end>,<H|V>`
pub fn flip(start_time: i32, end_time: i32, direction: Flip) -> OsbResult<String> {
    let letter = direction.letter()?;
    Ok(parameter(start_time, end_time, letter))
}

/// `P,<start>,<end>,A`
pub fn additive_color_blending(start_time: i32, end_time: i32) -> String {
    parameter(start_time, end_time, 'A')
}

fn parameter(start_time: i32, end_time: i32, letter: char) -> String {
    let end = Timing::span(start_time, end_time).end_field();
    format!("P,{start_time},{end},{letter}")
}

/// `T,<condition>,<start>,<end>`; the end time is always written.
pub fn trigger(on: TriggerCondition, start_time: i32, end_time: i32) -> String {
    format!("T,{on},{start_time},{end_time}")
}

#[cfg(test)]
#[path = "../../tests/unit/command/encode.rs"]
mod tests;
