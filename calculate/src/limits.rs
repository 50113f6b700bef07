/// Limits on what the calculator accepts
///
/// The input arrives as a single command-line argument, so real inputs are
/// tiny. The limit exists to reject pathological input before decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes
    /// Real usage: ~20 bytes, Limit: 1MB
    pub max_input_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024, // 1 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
