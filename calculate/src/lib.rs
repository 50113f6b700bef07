//! # Calculate Engine
//!
//! Decode a JSON object carrying two numbers `a` and `b`, and compute their
//! sum, difference and product.
//!
//! ## Quick Start
//!
//! ```rust
//! use calculate::{Calculator, CalcResult};
//!
//! fn main() -> CalcResult<()> {
//!     let calculator = Calculator::new();
//!     let record = calculator.compute(r#"{"a": 3, "b": 4}"#)?;
//!
//!     assert_eq!(
//!         record.to_json()?,
//!         r#"{"sum": 7, "difference": -1, "product": 12}"#
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Numbers
//!
//! Integers stay integers as long as both operands are integers. A single
//! float operand promotes the whole operation to `f64`, so `2.5 + 1.5`
//! renders as `4.0` while `3 + 4` renders as `7`.
//!
//! ## Errors
//!
//! Every failure (malformed JSON, a missing field, a non-numeric operand,
//! overflow) is a [`CalcError`]. Callers usually render it as a single
//! `Error: <message>` line; see [`Outcome`].

pub mod calculator;
pub mod error;
pub mod input;
pub mod limits;
pub mod number;
pub mod operations;
pub mod outcome;
pub mod record;
pub mod serializers;

pub use calculator::Calculator;
pub use error::CalcError;
pub use input::InputRecord;
pub use limits::Limits;
pub use number::Number;
pub use operations::{arithmetic_operation, ArithmeticOperation};
pub use outcome::Outcome;
pub use record::ResultRecord;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
