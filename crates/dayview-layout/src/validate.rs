#![forbid(unsafe_code)]

//! Well-formedness checks for raw `{start, end}` input.
//!
//! Raw events arrive as JSON values so that malformed shapes (missing keys,
//! strings where numbers belong, fractional minutes) can be reported
//! precisely instead of failing somewhere inside deserialization. Rules are
//! checked in a fixed order and the first failure wins:
//!
//! 1. non-null, non-empty input
//! 2. an object exposing both `start` and `end` (arrays are structured but
//!    never carry the keys)
//! 3. both fields numeric, where null, booleans and blank strings coerce to
//!    a number the way loosely typed callers expect
//! 4. both fields integral JSON numbers
//! 5. `start >= 0`
//! 6. `start < end`

use std::fmt;

use dayview_core::{Interval, IntervalError};
use serde_json::{Map, Number, Value};

/// One of the two required event fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Start,
    End,
}

impl Field {
    /// JSON key of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a raw event was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was null, an empty object, or an empty array.
    Empty,
    /// Input was a scalar.
    WrongShape { found: &'static str },
    /// The object lacks `start` or `end`.
    MissingField { field: Field },
    /// A field holds something other than a number.
    NotNumeric { field: Field },
    /// A field holds a number that is not an integer minute.
    NotInteger { field: Field },
    NegativeStart { start: i64 },
    StartNotBeforeEnd { start: i64, end: i64 },
}

impl From<IntervalError> for ValidationError {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::NegativeStart { start } => Self::NegativeStart { start },
            IntervalError::StartNotBeforeEnd { start, end } => {
                Self::StartNotBeforeEnd { start, end }
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "event must be a non-empty value"),
            Self::WrongShape { found } => {
                write!(f, "event must be an object with start and end, got {found}")
            }
            Self::MissingField { field } => {
                write!(f, "event is missing required field '{field}'")
            }
            Self::NotNumeric { field } => write!(f, "event field '{field}' must be a number"),
            Self::NotInteger { field } => {
                write!(f, "event field '{field}' must be an integer minute")
            }
            Self::NegativeStart { start } => {
                write!(f, "event start must not be negative (got {start})")
            }
            Self::StartNotBeforeEnd { start, end } => write!(
                f,
                "event start must be lower than end ({start}:{end} passed)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A batch argument that is not a sequence of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputShapeError {
    pub found: &'static str,
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected an array of events, got {}", self.found)
    }
}

impl std::error::Error for InputShapeError {}

/// Validate a raw event, producing its interval.
pub fn validate(raw: &Value) -> Result<Interval, ValidationError> {
    let fields = match raw {
        Value::Null => return Err(ValidationError::Empty),
        Value::Object(map) if map.is_empty() => return Err(ValidationError::Empty),
        Value::Object(map) => map,
        Value::Array(items) if items.is_empty() => return Err(ValidationError::Empty),
        Value::Array(_) => {
            return Err(ValidationError::MissingField {
                field: Field::Start,
            });
        }
        other => {
            return Err(ValidationError::WrongShape {
                found: kind_name(other),
            });
        }
    };

    let start = required(fields, Field::Start)?;
    let end = required(fields, Field::End)?;

    let start = numeric(Field::Start, start)?;
    let end = numeric(Field::End, end)?;

    let start = integer(Field::Start, start)?;
    let end = integer(Field::End, end)?;

    Ok(Interval::new(start, end)?)
}

/// Human-readable JSON type name, used in shape errors.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required(fields: &Map<String, Value>, field: Field) -> Result<&Value, ValidationError> {
    fields
        .get(field.key())
        .ok_or(ValidationError::MissingField { field })
}

/// A field that passed the numeric check. Only real JSON numbers can go on
/// to be integral; coerced values always fail the integer check.
enum Numeric<'a> {
    Number(&'a Number),
    Coerced,
}

fn numeric(field: Field, value: &Value) -> Result<Numeric<'_>, ValidationError> {
    match value {
        Value::Number(n) => Ok(Numeric::Number(n)),
        Value::Null | Value::Bool(_) => Ok(Numeric::Coerced),
        Value::String(s) if is_numeric_text(s) => Ok(Numeric::Coerced),
        _ => Err(ValidationError::NotNumeric { field }),
    }
}

/// Blank text coerces to zero; anything else must parse as a finite number.
fn is_numeric_text(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s.parse::<f64>().is_ok_and(f64::is_finite)
}

fn integer(field: Field, value: Numeric<'_>) -> Result<i64, ValidationError> {
    let not_integer = ValidationError::NotInteger { field };
    let Numeric::Number(n) = value else {
        return Err(not_integer);
    };
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        // Beyond i64::MAX.
        return Err(not_integer);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(not_integer),
    }
}
