//! Numeric model for decoded operands and computed results.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A JSON number as the calculator sees it.
///
/// Numbers written without fraction or exponent that fit in `i64` are
/// integers; everything else is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Interpret a decoded JSON value as a number, if it is one.
    ///
    /// Integer or float is decided by how the number was written, so `-0`
    /// is the integer `0` and `3.0` is a float. Booleans count as `0`/`1`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Self::from_literal(&n.to_string()),
            Value::Bool(b) => Some(Number::Integer(i64::from(*b))),
            _ => None,
        }
    }

    /// Classify the text of a JSON number literal.
    ///
    /// Literals without fraction or exponent that fit in `i64` are integers,
    /// everything else parses as `f64` (overflowing to infinity if needed).
    pub fn from_literal(literal: &str) -> Option<Self> {
        let is_float = literal.contains(['.', 'e', 'E']);
        if !is_float {
            if let Ok(i) = literal.parse::<i64>() {
                return Some(Number::Integer(i));
            }
        }
        literal.parse::<f64>().ok().map(Number::Float)
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&float_repr(*x)),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            Number::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

/// Name of a JSON value's kind, used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shortest round-tripping text for a float, always carrying a fraction or
/// an exponent.
///
/// Decimal exponents in `-4..16` print positionally (`4.0`, `0.0001`),
/// anything else in scientific notation with a signed two-digit exponent
/// (`1e+16`, `1.5e-05`).
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{}.0", positional)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}
