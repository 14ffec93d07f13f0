//! Integer rounding policies applied to a computed result.
//!
//! Operates on the raw literal retained from a successful evaluation and
//! reduces it to a grouped integer string. Ties are detected by comparing
//! the fraction digits against one-half exactly, which keeps the
//! half-to-even semantics without any float epsilon.

use crate::decimal::{digits_value, DecimalLiteral};
use crate::error::CalcError;
use crate::format::group_digits;
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

/// How to reduce a fractional result to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero.
    Math,
    /// Round half to even (banker's rounding).
    Bank,
    /// Drop the fraction toward zero.
    Truncate,
}

impl FromStr for RoundingMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(RoundingMode::Math),
            "bank" => Ok(RoundingMode::Bank),
            "truncate" => Ok(RoundingMode::Truncate),
            _ => Err(CalcError::Usage),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Math => "math",
            RoundingMode::Bank => "bank",
            RoundingMode::Truncate => "truncate",
        };
        f.write_str(name)
    }
}

/// Where the fraction sits relative to exactly one-half.
#[derive(Debug, PartialEq, Eq)]
enum HalfCmp {
    Below,
    Exact,
    Above,
}

/// Rounds a literal to an integer under the selected policy and renders
/// it with thousands grouping.
///
/// # Examples
///
/// ```
/// use bignum_calc::{round_to_integer, DecimalLiteral, RoundingMode};
///
/// let n: DecimalLiteral = "2.5".parse().unwrap();
/// assert_eq!(round_to_integer(&n, RoundingMode::Bank), "2");
/// assert_eq!(round_to_integer(&n, RoundingMode::Math), "3");
/// ```
pub fn round_to_integer(value: &DecimalLiteral, mode: RoundingMode) -> String {
    let floor = digits_value(value.int_digits().bytes());
    let half = compare_fraction_to_half(value.frac_digits());

    let bump = match mode {
        RoundingMode::Math => half != HalfCmp::Below,
        RoundingMode::Bank => match half {
            HalfCmp::Above => true,
            HalfCmp::Below => false,
            // tie: keep whichever of floor / floor + 1 is even
            HalfCmp::Exact => is_odd(value.int_digits()),
        },
        RoundingMode::Truncate => false,
    };

    let magnitude = if bump { floor + 1u32 } else { floor };
    render(&magnitude, value.negative())
}

fn compare_fraction_to_half(frac: &str) -> HalfCmp {
    let mut bytes = frac.bytes();
    match bytes.next() {
        None => HalfCmp::Below,
        Some(b) if b < b'5' => HalfCmp::Below,
        Some(b) if b > b'5' => HalfCmp::Above,
        _ => {
            if bytes.any(|b| b != b'0') {
                HalfCmp::Above
            } else {
                HalfCmp::Exact
            }
        }
    }
}

fn is_odd(int_digits: &str) -> bool {
    int_digits
        .bytes()
        .next_back()
        .is_some_and(|b| (b - b'0') % 2 == 1)
}

/// Regroups the rounded magnitude, reapplying the sign unless the result
/// is zero.
fn render(magnitude: &BigUint, negative: bool) -> String {
    let digits = magnitude.to_string();
    let grouped = group_digits(&digits);
    if negative && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
