//! Type-aware arithmetic on decoded operands
//!
//! Integer op Integer stays integral (checked). Any float operand promotes
//! the operation to `f64`. Anything that is not a number is rejected.

use crate::number::{type_name, Number};
use crate::{CalcError, CalcResult};
use serde_json::Value;

/// The three operations a result record is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperation {
    Add,
    Subtract,
    Multiply,
}

impl ArithmeticOperation {
    pub fn symbol(&self) -> char {
        match self {
            ArithmeticOperation::Add => '+',
            ArithmeticOperation::Subtract => '-',
            ArithmeticOperation::Multiply => '*',
        }
    }
}

/// Apply `op` to two decoded JSON values.
///
/// # Examples
/// ```text
/// 3 + 4       = 7
/// 2.5 * 1.5   = 3.75
/// 2 + 0.5     = 2.5
/// "x" + 2     -> unsupported operand types for +: 'string' and 'number'
/// ```
pub fn arithmetic_operation(
    left: &Value,
    op: ArithmeticOperation,
    right: &Value,
) -> CalcResult<Number> {
    match (Number::from_json(left), Number::from_json(right)) {
        (Some(l), Some(r)) => number_arithmetic(l, op, r),
        _ => Err(CalcError::UnsupportedOperands {
            op: op.symbol(),
            left: type_name(left),
            right: type_name(right),
        }),
    }
}

/// Perform arithmetic on two numbers, promoting to float when either is one
pub fn number_arithmetic(
    left: Number,
    op: ArithmeticOperation,
    right: Number,
) -> CalcResult<Number> {
    match (left, right) {
        (Number::Integer(l), Number::Integer(r)) => integer_arithmetic(l, op, r),
        _ => float_arithmetic(left.as_f64(), op, right.as_f64()),
    }
}

fn integer_arithmetic(left: i64, op: ArithmeticOperation, right: i64) -> CalcResult<Number> {
    let result = match op {
        ArithmeticOperation::Add => left.checked_add(right),
        ArithmeticOperation::Subtract => left.checked_sub(right),
        ArithmeticOperation::Multiply => left.checked_mul(right),
    };

    result.map(Number::Integer).ok_or(CalcError::Overflow {
        op: op.symbol(),
        left,
        right,
    })
}

fn float_arithmetic(left: f64, op: ArithmeticOperation, right: f64) -> CalcResult<Number> {
    let result = match op {
        ArithmeticOperation::Add => left + right,
        ArithmeticOperation::Subtract => left - right,
        ArithmeticOperation::Multiply => left * right,
    };

    // inf and nan have no JSON spelling
    if !result.is_finite() {
        return Err(CalcError::NonFinite(Number::Float(result).to_string()));
    }
    Ok(Number::Float(result))
}
