use crate::{CalcError, CalcResult, InputRecord, Limits, Outcome, ResultRecord};

/// Turns input text into a result record.
///
/// Holds no state besides its limits, so one calculator can serve any
/// number of inputs and always answers the same input the same way.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    limits: Limits,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom limits
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Decode input text, enforcing the size limit first
    pub fn decode(&self, text: &str) -> CalcResult<InputRecord> {
        self.decode_slice(text.as_bytes())
    }

    /// Decode raw input bytes, enforcing the size limit first
    pub fn decode_slice(&self, bytes: &[u8]) -> CalcResult<InputRecord> {
        if bytes.len() > self.limits.max_input_bytes {
            return Err(CalcError::InputTooLarge {
                actual: bytes.len(),
                limit: self.limits.max_input_bytes,
            });
        }
        InputRecord::from_slice(bytes)
    }

    /// Decode input text and compute its result record
    pub fn compute(&self, text: &str) -> CalcResult<ResultRecord> {
        self.compute_slice(text.as_bytes())
    }

    pub fn compute_slice(&self, bytes: &[u8]) -> CalcResult<ResultRecord> {
        let record = self.decode_slice(bytes)?;
        let (a, b) = record.operands()?;
        ResultRecord::from_operands(a, b)
    }

    /// Run one invocation: no input, or the first argument as input text
    pub fn evaluate(&self, input: Option<&str>) -> Outcome {
        self.evaluate_slice(input.map(str::as_bytes))
    }

    /// Like [`Calculator::evaluate`], for arguments that may not be UTF-8
    pub fn evaluate_slice(&self, input: Option<&[u8]>) -> Outcome {
        match input {
            None => Outcome::NoArguments,
            Some(bytes) => match self.compute_slice(bytes) {
                Ok(record) => Outcome::Computed(record),
                Err(err) => Outcome::Failed(err),
            },
        }
    }
}
