mod json;

pub use json::{to_string, SpacedFormatter};
