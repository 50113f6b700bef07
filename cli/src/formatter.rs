use calculate::{CalcError, Outcome};

/// Printed when the program is started without input
pub const NO_ARGUMENTS_MESSAGE: &str = "No arguments provided";

/// Renders an outcome as the single line written to stdout
pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::NoArguments => NO_ARGUMENTS_MESSAGE.to_string(),
            Outcome::Computed(record) => match record.to_json() {
                Ok(json) => json,
                Err(err) => self.format_error(&err),
            },
            Outcome::Failed(err) => self.format_error(err),
        }
    }

    /// Every error kind renders the same way
    pub fn format_error(&self, error: &CalcError) -> String {
        format!("Error: {}", error)
    }
}
