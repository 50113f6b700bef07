use crate::number::type_name;
use crate::{CalcError, CalcResult};
use serde_json::{Map, Value};

/// A decoded input object.
///
/// Holds every member of the object; only `a` and `b` are ever looked up,
/// the rest is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    fields: Map<String, Value>,
}

impl InputRecord {
    /// Decode JSON text into an input record.
    ///
    /// Fails when the text is not JSON or when its top level is not an object.
    pub fn from_json(text: &str) -> CalcResult<Self> {
        Self::from_slice(text.as_bytes())
    }

    /// Decode raw bytes; bytes that are not UTF-8 fail like any other bad JSON
    pub fn from_slice(bytes: &[u8]) -> CalcResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(CalcError::NotAnObject(type_name(&other))),
        }
    }

    /// Look up a required field by name
    pub fn field(&self, name: &str) -> CalcResult<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| CalcError::MissingField(name.to_string()))
    }

    /// The two operands, `a` looked up before `b`
    pub fn operands(&self) -> CalcResult<(&Value, &Value)> {
        let a = self.field("a")?;
        let b = self.field("b")?;
        Ok((a, b))
    }
}
