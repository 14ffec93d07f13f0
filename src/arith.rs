//! Exact arithmetic over decimal literals.
//!
//! Every operation aligns its operands on a shared (or derived) scale and
//! works on the equivalent arbitrary-precision integers, so the only
//! precision loss in the whole engine is the explicit quotient scale of
//! division.

use crate::decimal::{pow10, DecimalLiteral};
use crate::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Quotient scale for two-operand division.
pub const PAIR_DIVISION_SCALE: usize = 6;

/// Quotient scale for divisions inside the chained pipeline.
pub const CHAIN_DIVISION_SCALE: usize = 10;

/// The closed set of binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Applies the operation, dividing at the given quotient scale.
    pub fn apply(
        self,
        lhs: &DecimalLiteral,
        rhs: &DecimalLiteral,
        division_scale: usize,
    ) -> Result<DecimalLiteral> {
        match self {
            Op::Add => Ok(add(lhs, rhs)),
            Op::Subtract => Ok(subtract(lhs, rhs)),
            Op::Multiply => Ok(multiply(lhs, rhs)),
            Op::Divide => divide(lhs, rhs, division_scale),
        }
    }
}

impl FromStr for Op {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" | "add" => Ok(Op::Add),
            "-" | "subtract" => Ok(Op::Subtract),
            "*" | "x" | "multiply" => Ok(Op::Multiply),
            "/" | "divide" => Ok(Op::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// Adds two literals exactly.
///
/// Both fractions are padded to the longer scale, the signed mantissas
/// are summed, and the magnitude is re-split at that scale.
pub fn add(lhs: &DecimalLiteral, rhs: &DecimalLiteral) -> DecimalLiteral {
    let scale = lhs.scale().max(rhs.scale());
    let sum = lhs.signed_mantissa(scale) + rhs.signed_mantissa(scale);
    DecimalLiteral::from_signed_mantissa(&sum, scale)
}

/// Subtracts `rhs` from `lhs` as an addition with the sign flipped.
pub fn subtract(lhs: &DecimalLiteral, rhs: &DecimalLiteral) -> DecimalLiteral {
    add(lhs, &rhs.negated())
}

/// Multiplies two literals exactly.
///
/// Signs combine independently of the magnitudes; the scales add, each
/// operand keeping its natural fraction length with no padding between
/// them.
pub fn multiply(lhs: &DecimalLiteral, rhs: &DecimalLiteral) -> DecimalLiteral {
    let scale = lhs.scale() + rhs.scale();
    let product = lhs.unsigned_mantissa(lhs.scale()) * rhs.unsigned_mantissa(rhs.scale());
    DecimalLiteral::from_mantissa(&product, lhs.negative() != rhs.negative(), scale)
}

/// Divides `lhs` by `rhs`, producing a quotient with exactly
/// `quotient_scale` fraction digits, rounded half-up on the remainder.
///
/// A divisor whose magnitude is exactly zero fails with
/// [`CalcError::DivisionByZero`] before any computation.
pub fn divide(
    lhs: &DecimalLiteral,
    rhs: &DecimalLiteral,
    quotient_scale: usize,
) -> Result<DecimalLiteral> {
    if rhs.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    let align = lhs.scale().max(rhs.scale());
    let dividend = lhs.unsigned_mantissa(align) * pow10(quotient_scale);
    let divisor = rhs.unsigned_mantissa(align);

    let quotient = &dividend / &divisor;
    let remainder = dividend % &divisor;
    // half-up: 2 * remainder >= divisor bumps the quotient
    let quotient = if remainder * 2u32 >= divisor {
        quotient + 1u32
    } else {
        quotient
    };

    Ok(DecimalLiteral::from_mantissa(
        &quotient,
        lhs.negative() != rhs.negative(),
        quotient_scale,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> DecimalLiteral {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_pads_fractions_to_common_scale() {
        assert_eq!(add(&lit("1.5"), &lit("2.25")).to_string(), "3.75");
        assert_eq!(add(&lit("0.1"), &lit("0.2")).to_string(), "0.3");
        assert_eq!(add(&lit("10"), &lit("-3")).to_string(), "7");
    }

    #[test]
    fn test_add_is_commutative_with_zero_identity() {
        let a = lit("123.456");
        let b = lit("-0.044");
        assert_eq!(add(&a, &b), add(&b, &a));
        assert_eq!(add(&a, &DecimalLiteral::zero()).to_string(), "123.456");
    }

    #[test]
    fn test_subtract_self_is_canonical_zero() {
        let a = lit("-42.42");
        let diff = subtract(&a, &a);
        assert!(diff.is_zero());
        assert!(!diff.negative());
    }

    #[test]
    fn test_subtract_flips_sign_of_rhs() {
        assert_eq!(subtract(&lit("5"), &lit("-3")).to_string(), "8");
        assert_eq!(subtract(&lit("1.0"), &lit("2.5")).to_string(), "-1.5");
        assert_eq!(subtract(&lit("5"), &lit("0")).to_string(), "5");
    }

    #[test]
    fn test_multiply_scales_add() {
        // fraction lengths 1 + 2 give 3 fraction digits in the raw result
        assert_eq!(multiply(&lit("1.5"), &lit("2.25")).to_string(), "3.375");
        assert_eq!(multiply(&lit("0.001"), &lit("0.01")).to_string(), "0.00001");
    }

    #[test]
    fn test_multiply_signs_combine() {
        assert_eq!(multiply(&lit("-2"), &lit("3")).to_string(), "-6");
        assert_eq!(multiply(&lit("-2"), &lit("-3")).to_string(), "6");
        let product = multiply(&lit("-2"), &lit("0"));
        assert!(!product.negative());
    }

    #[test]
    fn test_divide_half_up_at_pair_scale() {
        let q = divide(&lit("1"), &lit("3"), PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(q.to_string(), "0.333333");
        let q = divide(&lit("2"), &lit("3"), PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(q.to_string(), "0.666667");
    }

    #[test]
    fn test_divide_exact_halves_round_up() {
        let q = divide(&lit("1"), &lit("2000000"), PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(q.to_string(), "0.000001");
    }

    #[test]
    fn test_divide_applies_combined_sign() {
        let q = divide(&lit("-1"), &lit("4"), PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(q.to_string(), "-0.250000");
        let q = divide(&lit("-1"), &lit("-4"), PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(q.to_string(), "0.250000");
    }

    #[test]
    fn test_divide_by_zero_in_any_form() {
        for zero in ["0", "0.0", "-0", "0.000"] {
            assert_eq!(
                divide(&lit("1"), &lit(zero), PAIR_DIVISION_SCALE),
                Err(CalcError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_multiply_then_divide_recovers_operand() {
        let a = lit("12.5");
        let b = lit("3.2");
        let product = multiply(&a, &b);
        let back = divide(&product, &b, PAIR_DIVISION_SCALE).unwrap();
        assert_eq!(back.round_to_scale(1).to_string(), "12.5");
    }

    #[test]
    fn test_op_parsing() {
        assert_eq!("+".parse::<Op>().unwrap(), Op::Add);
        assert_eq!("x".parse::<Op>().unwrap(), Op::Multiply);
        assert_eq!("divide".parse::<Op>().unwrap(), Op::Divide);
        assert_eq!(
            "%".parse::<Op>(),
            Err(CalcError::UnknownOperation("%".to_string()))
        );
    }
}
