//! Assertion primitives shared by every public entry point.
//!
//! Shape checks ([`assert_type`]) operate on dynamic JSON values and raise
//! [`OsbError::Type`]; membership, range and file-name checks raise
//! [`OsbError::InvalidValue`]. None of these are caught inside the crate.

use std::{fmt::Display, ops::RangeInclusive};

use serde_json::Value;

use crate::foundation::error::{OsbError, OsbResult};

/// Runtime shape accepted by [`assert_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON boolean.
    Bool,
    /// A JSON object.
    Object,
    /// A JSON array whose elements all match the inner kind.
    ArrayOf(&'static Kind),
}

impl Kind {
    /// Human-readable kind name used in error messages.
    pub fn name(self) -> String {
        match self {
            Self::Integer => "Integer".to_string(),
            Self::Number => "Numeric".to_string(),
            Self::String => "String".to_string(),
            Self::Bool => "Boolean".to_string(),
            Self::Object => "Object".to_string(),
            Self::ArrayOf(inner) => format!("Array<{}>", inner.name()),
        }
    }

    /// Return `true` when `value` has this shape.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::ArrayOf(inner) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| inner.matches(v))),
        }
    }
}

/// Name of the runtime kind of `value`, as reported back to the caller.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Integer",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Fail with [`OsbError::Type`] unless `value` matches one of `kinds`.
pub fn assert_type(value: &Value, kinds: &[Kind], param: &str) -> OsbResult<()> {
    if kinds.iter().any(|k| k.matches(value)) {
        return Ok(());
    }
    let accepted = kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(OsbError::type_error(format!(
        "Parameter {param} expects type {accepted}, got type {} instead.",
        kind_of(value)
    )))
}

/// Fail with [`OsbError::InvalidValue`] unless `value` is one of `allowed`.
pub fn assert_one_of<T>(value: &T, allowed: &[T], param: &str) -> OsbResult<()>
where
    T: PartialEq + Display,
{
    if allowed.contains(value) {
        return Ok(());
    }
    Err(not_one_of(value, allowed, param))
}

/// The [`OsbError::InvalidValue`] raised by [`assert_one_of`], for callers that
/// already know the value is not in the set.
pub fn not_one_of<T: Display>(value: &T, allowed: &[T], param: &str) -> OsbError {
    let accepted = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    OsbError::invalid_value(format!(
        "Parameter {param} expects {accepted}, got {} instead.",
        describe(value)
    ))
}

/// Fail with [`OsbError::InvalidValue`] unless `value` lies in the inclusive `range`.
///
/// NaN is never in range.
pub fn assert_in_range<T>(value: T, range: RangeInclusive<T>, param: &str) -> OsbResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(OsbError::invalid_value(format!(
        "Parameter {param} expects value within {} to {}, got {value} instead.",
        range.start(),
        range.end()
    )))
}

/// Fail with [`OsbError::InvalidValue`] if `value` is NaN or infinite.
pub fn assert_finite(value: f64, param: &str) -> OsbResult<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(OsbError::invalid_value(format!(
        "Parameter {param} expects a finite number, got {value} instead."
    )))
}

/// Fail with [`OsbError::InvalidValue`] unless `path` names a file with one of `exts`.
///
/// Extensions compare case-insensitively. The path must also be quotable in the
/// output document, so it may not contain `"` or line breaks.
pub fn assert_file_extension(path: &str, exts: &[&str], param: &str) -> OsbResult<()> {
    if path.contains(['"', '\n', '\r']) {
        return Err(OsbError::invalid_value(format!(
            "Parameter {param} must not contain quotes or line breaks, got {path:?} instead."
        )));
    }

    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let valid = match file_name.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.trim().is_empty() && exts.iter().any(|e| e.eq_ignore_ascii_case(ext))
        }
        None => false,
    };
    if valid {
        return Ok(());
    }

    let accepted = exts
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(" or ");
    Err(OsbError::invalid_value(format!(
        "Parameter {param} must end with {accepted}, got {} instead.",
        describe(&path)
    )))
}

fn describe<T: Display>(value: &T) -> String {
    let s = value.to_string();
    if s.is_empty() {
        "an empty string".to_string()
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/validate.rs"]
mod tests;
