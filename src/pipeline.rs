//! Evaluation pipelines over raw operand text.
//!
//! Two entry points: the two-operand form, and the chained form that
//! combines up to four operands through three configurable operations
//! with intermediate rounding and range re-validation at each stage.
//! The first failure at any stage aborts the evaluation; no partial
//! result is ever produced.

use crate::arith::{Op, CHAIN_DIVISION_SCALE, PAIR_DIVISION_SCALE};
use crate::decimal::DecimalLiteral;
use crate::error::{CalcError, RangeContext, Result};
use crate::format::format_result;
use crate::parser;
use crate::range;
use log::debug;

/// The three operator slots of the chained pipeline, set by the caller
/// and read-only during an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub op1: Op,
    pub op2: Op,
    pub op3: Op,
}

/// A successful evaluation: the display text plus the raw final literal,
/// retained so a rounding policy can be applied without recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Grouped, trimmed text for display.
    pub display: String,
    /// The unformatted, unrounded final result.
    pub raw: DecimalLiteral,
}

/// Evaluates `lhs op rhs`.
///
/// Blank operands are an error in this mode. Both operands and the
/// result are range-checked; division carries six fraction digits.
///
/// # Examples
///
/// ```
/// use bignum_calc::{evaluate_pair, Op};
///
/// let eval = evaluate_pair("1", "3", Op::Divide).unwrap();
/// assert_eq!(eval.display, "0.333333");
/// ```
pub fn evaluate_pair(lhs: &str, rhs: &str, op: Op) -> Result<Evaluation> {
    let a = parser::parse(lhs)?.ok_or(CalcError::MissingOperand)?;
    let b = parser::parse(rhs)?.ok_or(CalcError::MissingOperand)?;
    range::check(&a, RangeContext::Operand)?;
    range::check(&b, RangeContext::Operand)?;

    let result = op.apply(&a, &b, PAIR_DIVISION_SCALE)?;
    debug!("pair: {} {} {} = {}", a, op, b, result);
    range::check(&result, RangeContext::Final)?;

    Ok(Evaluation {
        display: format_result(&result),
        raw: result,
    })
}

/// Evaluates four operands through the three configured operations.
///
/// Blank operands default to zero. The order is fixed, not left-to-right:
/// `i1 = op2(b, c)`, then `i2 = op1(a, i1)`, then `final = op3(i2, d)`.
/// Each intermediate is rounded half-up to ten fraction digits and
/// range-checked; the final result is range-checked but kept raw.
pub fn evaluate_chain(operands: [&str; 4], config: &PipelineConfig) -> Result<Evaluation> {
    let a = chain_operand(operands[0])?;
    let b = chain_operand(operands[1])?;
    let c = chain_operand(operands[2])?;
    let d = chain_operand(operands[3])?;

    let i1 = config
        .op2
        .apply(&b, &c, CHAIN_DIVISION_SCALE)?
        .round_to_scale(CHAIN_DIVISION_SCALE);
    debug!("stage 1: {} {} {} = {}", b, config.op2, c, i1);
    range::check(&i1, RangeContext::Intermediate)?;

    let i2 = config
        .op1
        .apply(&a, &i1, CHAIN_DIVISION_SCALE)?
        .round_to_scale(CHAIN_DIVISION_SCALE);
    debug!("stage 2: {} {} {} = {}", a, config.op1, i1, i2);
    range::check(&i2, RangeContext::Intermediate)?;

    let result = config.op3.apply(&i2, &d, CHAIN_DIVISION_SCALE)?;
    debug!("stage 3: {} {} {} = {}", i2, config.op3, d, result);
    range::check(&result, RangeContext::Final)?;

    Ok(Evaluation {
        display: format_result(&result),
        raw: result,
    })
}

/// Parses one chained-mode operand; blank input counts as zero.
fn chain_operand(raw: &str) -> Result<DecimalLiteral> {
    let value = parser::parse(raw)?.unwrap_or_else(DecimalLiteral::zero);
    range::check(&value, RangeContext::Operand)?;
    Ok(value)
}
