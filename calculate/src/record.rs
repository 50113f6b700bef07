use crate::number::Number;
use crate::operations::{arithmetic_operation, ArithmeticOperation};
use crate::{serializers, CalcResult};
use serde::Serialize;
use serde_json::Value;

/// The three values computed from one pair of operands.
///
/// Serializes with its fields in declaration order:
/// `{"sum": .., "difference": .., "product": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRecord {
    pub sum: Number,
    pub difference: Number,
    pub product: Number,
}

impl ResultRecord {
    /// Compute sum, difference and product, in that order.
    ///
    /// The first operation that fails decides the error.
    pub fn from_operands(a: &Value, b: &Value) -> CalcResult<Self> {
        Ok(Self {
            sum: arithmetic_operation(a, ArithmeticOperation::Add, b)?,
            difference: arithmetic_operation(a, ArithmeticOperation::Subtract, b)?,
            product: arithmetic_operation(a, ArithmeticOperation::Multiply, b)?,
        })
    }

    pub fn to_json(&self) -> CalcResult<String> {
        serializers::to_string(self)
    }
}
