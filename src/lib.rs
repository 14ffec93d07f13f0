//! # Big-Number Calculator
//!
//! An exact decimal calculator for numbers beyond native floating-point
//! precision.
//!
//! ## Design Principles
//!
//! - **Scaled-integer arithmetic**: every operation runs on an
//!   arbitrary-precision mantissa with an explicit decimal scale via
//!   `num_bigint`; floats appear only in the approximate range guard
//! - **Specific rejection**: each way an operand can be malformed has its
//!   own error, down to the four kinds of bad thousands spacing
//! - **No partial results**: an evaluation either produces a formatted
//!   result plus its raw literal, or a single error
//!
//! ## Example
//!
//! ```
//! use bignum_calc::{evaluate_chain, Op, PipelineConfig, RoundingMode};
//!
//! let config = PipelineConfig {
//!     op1: Op::Add,
//!     op2: Op::Multiply,
//!     op3: Op::Subtract,
//! };
//! let eval = evaluate_chain(["10", "2", "4", "1"], &config).unwrap();
//! assert_eq!(eval.display, "17");
//!
//! let rounded = bignum_calc::round_to_integer(&eval.raw, RoundingMode::Bank);
//! assert_eq!(rounded, "17");
//! ```

pub mod arith;
pub mod decimal;
pub mod error;
pub mod format;
pub mod parser;
pub mod pipeline;
pub mod range;
pub mod rounding;

pub use arith::{add, divide, multiply, subtract, Op};
pub use decimal::DecimalLiteral;
pub use error::{CalcError, RangeContext, Result, SpacingError};
pub use format::format_result;
pub use parser::parse;
pub use pipeline::{evaluate_chain, evaluate_pair, Evaluation, PipelineConfig};
pub use rounding::{round_to_integer, RoundingMode};
