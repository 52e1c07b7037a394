//! Numeric coercion shared by the arithmetic, comparison, and turtle
//! primitives.
//!
//! Grounded in `logo_primitives.py`'s `numeric`/`to_num` decorator: every
//! numeric primitive tries an integer parse before falling back to float,
//! and a failed parse raises `"<value> is not a number"`. Kept as a small
//! two-variant tower (rather than always widening to `f64`) so `sum`/
//! `difference`/`product` preserve integer results the way the original
//! does, while `div`/`quotient` always perform true (floating-point)
//! division regardless of operand type, matching `operator.truediv`.

use crate::error::{LogoError, Result};
use crate::value::Value;

/// A coerced Logo number: an integer when the source parses cleanly as
/// one, a float otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// An integer-valued number.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl NumberValue {
    /// Widen to `f64`, used by comparisons and division.
    pub fn as_f64(self) -> f64 {
        match self {
            NumberValue::Int(i) => i as f64,
            NumberValue::Float(f) => f,
        }
    }

    /// Render back to the string form a Logo word carries.
    pub fn to_value(self) -> Value {
        match self {
            NumberValue::Int(i) => Value::word(i.to_string()),
            NumberValue::Float(f) => Value::word(format_float(f)),
        }
    }
}

/// Render a float the way Python's `str(float)` does: a whole-valued
/// float still carries a trailing `.0` rather than printing as a bare
/// integer, so `div`/`quotient` and any arithmetic promotion that lands
/// on a whole number stay visibly floats.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

/// Coerce a value's word text to a number: integer parse first, float
/// parse second, error otherwise.
pub fn to_number(value: &Value) -> Result<NumberValue> {
    let text = value
        .as_word()
        .ok_or_else(|| LogoError::interpreter(format!("{value} is not a number")))?;
    if let Ok(i) = text.parse::<i64>() {
        return Ok(NumberValue::Int(i));
    }
    text.parse::<f64>()
        .map(NumberValue::Float)
        .map_err(|_| LogoError::interpreter(format!("{text} is not a number")))
}

/// Coerce a value's word text to a Logo boolean. Only the literals
/// `True`/`False` are accepted.
pub fn to_bool(value: &Value) -> Result<bool> {
    match value.as_word() {
        Some("True") => Ok(true),
        Some("False") => Ok(false),
        _ => Err(LogoError::interpreter(format!("{value} is not a boolean value"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_before_float() {
        assert_eq!(to_number(&Value::word("4")).unwrap(), NumberValue::Int(4));
        assert_eq!(to_number(&Value::word("4.5")).unwrap(), NumberValue::Float(4.5));
    }

    #[test]
    fn non_numeric_word_is_an_error() {
        let err = to_number(&Value::word("abc")).unwrap_err();
        assert!(matches!(err, LogoError::Interpreter(msg) if msg == "abc is not a number"));
    }

    #[test]
    fn sentence_is_never_numeric() {
        assert!(to_number(&Value::Sentence(vec![])).is_err());
    }
}
