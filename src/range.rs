//! The supported-magnitude bound, applied to every operand and result.

use crate::decimal::DecimalLiteral;
use crate::error::{CalcError, RangeContext, Result};
use std::cmp::Ordering;

/// Largest supported magnitude, inclusive.
pub const RANGE_LIMIT: f64 = 1_000_000_000_000.0;

/// Digits of the limit, for the exact boundary comparison.
const LIMIT_DIGITS: &str = "1000000000000";

/// Checks that a literal lies within `±1,000,000,000,000` inclusive.
///
/// The primary check is a floating approximation: the authoritative value
/// downstream is always the exact scaled-integer result, so this only has
/// to reject gross overflow. The one place the float cannot decide is a
/// value whose approximation lands exactly on the limit (anything within
/// half an ulp of 1e12 rounds onto it); there the digits are compared
/// exactly, so `1000000000000` passes and `1000000000000.000001` does not.
pub fn in_range(value: &DecimalLiteral) -> bool {
    let approx: f64 = value.to_string().parse().unwrap_or(f64::INFINITY);
    if approx.abs() < RANGE_LIMIT {
        return true;
    }
    if approx.abs() > RANGE_LIMIT {
        return false;
    }
    !exceeds_limit(value)
}

/// Validates a literal against the bound, tagging any failure with where
/// in the pipeline it was detected.
pub fn check(value: &DecimalLiteral, context: RangeContext) -> Result<()> {
    if in_range(value) {
        Ok(())
    } else {
        Err(CalcError::RangeExceeded(context))
    }
}

/// Exact digit comparison of the magnitude against the limit.
///
/// Relies on the literal invariant that `int_digits` has no leading
/// zeros, so equal-length digit strings compare lexicographically.
fn exceeds_limit(value: &DecimalLiteral) -> bool {
    match value.int_digits().len().cmp(&LIMIT_DIGITS.len()) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => match value.int_digits().cmp(LIMIT_DIGITS) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => value.frac_digits().bytes().any(|b| b != b'0'),
        },
    }
}
