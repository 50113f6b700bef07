use thiserror::Error;

/// Everything that can go wrong between receiving the input text and
/// producing a result record.
///
/// The variants are kept apart so library callers can match on them, but
/// the command line renders all of them the same way: `Error: <message>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The input is not valid JSON
    #[error("{0}")]
    Parse(String),

    /// The input is valid JSON but not an object
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required operand is absent
    #[error("missing field '{0}'")]
    MissingField(String),

    /// An operand is not a number
    #[error("unsupported operand types for {op}: '{left}' and '{right}'")]
    UnsupportedOperands {
        op: char,
        left: &'static str,
        right: &'static str,
    },

    /// Integer arithmetic left the i64 range
    #[error("integer overflow in {left} {op} {right}")]
    Overflow { op: char, left: i64, right: i64 },

    /// A float result is infinite or NaN and cannot be written as JSON
    #[error("Out of range float values are not JSON compliant: {0}")]
    NonFinite(String),

    /// The input text is larger than the configured limit
    #[error("input is {actual} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge { actual: usize, limit: usize },
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Parse(err.to_string())
    }
}
