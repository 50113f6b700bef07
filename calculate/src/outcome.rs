use crate::{CalcError, ResultRecord};

/// How a single invocation ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No input was supplied
    NoArguments,
    /// The input produced a result record
    Computed(ResultRecord),
    /// The input could not be decoded or computed
    Failed(CalcError),
}

impl Outcome {
    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }

    /// The error if the invocation failed, None otherwise
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::NoArguments => "no_arguments",
            Outcome::Computed(_) => "computed",
            Outcome::Failed(_) => "failed",
        }
    }
}
