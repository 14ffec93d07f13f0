//! Canonical decimal literal type and its scaled-integer core.
//!
//! All arithmetic in this crate happens on an arbitrary-precision mantissa
//! (`num_bigint`) with an explicit power-of-ten scale, so no precision is
//! ever lost to floating point. A `DecimalLiteral` is the normalized
//! sign/integer-digits/fraction-digits form that flows between the parser,
//! the arithmetic engine, the formatter and the rounding engine.

use crate::error::CalcError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// A decimal number as sign plus integer and fraction digit strings.
///
/// # Invariants
///
/// - Digits are ASCII `0`-`9` only.
/// - `int_digits` carries no leading zeros except a lone `"0"`.
/// - `negative` is `false` whenever the value is zero.
/// - The `Display` form `[-]int[.frac]` round-trips through the parser.
///
/// # Examples
///
/// ```
/// use bignum_calc::DecimalLiteral;
///
/// let n: DecimalLiteral = "-007.250".parse().unwrap();
/// assert_eq!(n.to_string(), "-7.250");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecimalLiteral {
    negative: bool,
    int_digits: String,
    frac_digits: String,
}

impl DecimalLiteral {
    /// Builds a literal from raw digit strings, normalizing as it goes:
    /// leading integer zeros are stripped down to a lone `"0"` and a
    /// zero value always comes out non-negative.
    ///
    /// Fraction digits are kept exactly as given (including trailing
    /// zeros); only the formatter trims them.
    pub fn from_parts(negative: bool, int_digits: &str, frac_digits: &str) -> Self {
        debug_assert!(int_digits.bytes().all(|b| b.is_ascii_digit()));
        debug_assert!(frac_digits.bytes().all(|b| b.is_ascii_digit()));

        let trimmed = int_digits.trim_start_matches('0');
        let int_digits = if trimmed.is_empty() { "0" } else { trimmed };
        let is_zero = int_digits == "0" && frac_digits.bytes().all(|b| b == b'0');

        DecimalLiteral {
            negative: negative && !is_zero,
            int_digits: int_digits.to_string(),
            frac_digits: frac_digits.to_string(),
        }
    }

    /// The canonical zero literal.
    pub fn zero() -> Self {
        DecimalLiteral::from_parts(false, "0", "")
    }

    /// Returns `true` if the numeric value is zero.
    pub fn is_zero(&self) -> bool {
        self.int_digits == "0" && self.frac_digits.bytes().all(|b| b == b'0')
    }

    /// Whether the value is negative. Always `false` for zero.
    pub fn negative(&self) -> bool {
        self.negative
    }

    /// Digits left of the decimal point, no leading zeros.
    pub fn int_digits(&self) -> &str {
        &self.int_digits
    }

    /// Digits right of the decimal point; may be empty.
    pub fn frac_digits(&self) -> &str {
        &self.frac_digits
    }

    /// Number of fraction digits (the fixed-point scale).
    pub fn scale(&self) -> usize {
        self.frac_digits.len()
    }

    /// The same magnitude with the opposite sign. Zero stays positive.
    pub fn negated(&self) -> Self {
        DecimalLiteral {
            negative: !self.negative && !self.is_zero(),
            int_digits: self.int_digits.clone(),
            frac_digits: self.frac_digits.clone(),
        }
    }

    /// The unsigned mantissa of this value at the requested scale.
    ///
    /// `scale` must be at least `self.scale()`; missing fraction digits
    /// are filled with trailing zeros.
    pub(crate) fn unsigned_mantissa(&self, scale: usize) -> BigUint {
        debug_assert!(scale >= self.frac_digits.len());
        let mantissa = digits_value(self.int_digits.bytes().chain(self.frac_digits.bytes()));
        mantissa * pow10(scale - self.frac_digits.len())
    }

    /// The signed mantissa of this value at the requested scale.
    pub(crate) fn signed_mantissa(&self, scale: usize) -> BigInt {
        let magnitude = BigInt::from(self.unsigned_mantissa(scale));
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Rebuilds a literal from an unsigned mantissa and a scale, splitting
    /// the digit string at the implied decimal point.
    pub(crate) fn from_mantissa(magnitude: &BigUint, negative: bool, scale: usize) -> Self {
        let digits = magnitude.to_string();
        if scale == 0 {
            return DecimalLiteral::from_parts(negative, &digits, "");
        }
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let split = padded.len() - scale;
        DecimalLiteral::from_parts(negative, &padded[..split], &padded[split..])
    }

    /// Rebuilds a literal from a signed mantissa and a scale.
    pub(crate) fn from_signed_mantissa(value: &BigInt, scale: usize) -> Self {
        DecimalLiteral::from_mantissa(value.magnitude(), value.sign() == Sign::Minus, scale)
    }

    /// Reduces the fraction to at most `max_scale` digits, rounding the
    /// dropped tail half-up (away from zero on the magnitude).
    pub fn round_to_scale(&self, max_scale: usize) -> Self {
        if self.frac_digits.len() <= max_scale {
            return self.clone();
        }
        let divisor = pow10(self.frac_digits.len() - max_scale);
        let mantissa = self.unsigned_mantissa(self.frac_digits.len());
        let quotient = &mantissa / &divisor;
        let remainder = mantissa % &divisor;
        let quotient = if remainder * 2u32 >= divisor {
            quotient + 1u32
        } else {
            quotient
        };
        DecimalLiteral::from_mantissa(&quotient, self.negative, max_scale)
    }
}

impl FromStr for DecimalLiteral {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)?.ok_or(CalcError::MissingOperand)
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.int_digits)?;
        if !self.frac_digits.is_empty() {
            write!(f, ".{}", self.frac_digits)?;
        }
        Ok(())
    }
}

/// Interprets a stream of ASCII digit bytes as an unsigned base-10 integer.
pub(crate) fn digits_value<I: Iterator<Item = u8>>(digits: I) -> BigUint {
    digits.fold(BigUint::zero(), |acc, b| acc * 10u32 + u32::from(b - b'0'))
}

/// `10^exp` as a `BigUint`.
pub(crate) fn pow10(exp: usize) -> BigUint {
    BigUint::from(10u32).pow(exp as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_strips_leading_zeros() {
        let n = DecimalLiteral::from_parts(false, "007", "250");
        assert_eq!(n.to_string(), "7.250");

        let n = DecimalLiteral::from_parts(false, "000", "");
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn test_zero_is_never_negative() {
        let n = DecimalLiteral::from_parts(true, "0", "000");
        assert!(!n.negative());
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0.000");
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for text in ["-7.250", "0", "1234.5", "0.001"] {
            let n: DecimalLiteral = text.parse().unwrap();
            assert_eq!(n.to_string(), text);
        }
    }

    #[test]
    fn test_negated_flips_sign_but_not_zero() {
        let n: DecimalLiteral = "1.5".parse().unwrap();
        assert_eq!(n.negated().to_string(), "-1.5");
        assert_eq!(n.negated().negated(), n);

        let zero = DecimalLiteral::zero();
        assert!(!zero.negated().negative());
    }

    #[test]
    fn test_mantissa_round_trip() {
        let n: DecimalLiteral = "-12.34".parse().unwrap();
        let mantissa = n.signed_mantissa(4);
        assert_eq!(mantissa.to_string(), "-123400");
        assert_eq!(
            DecimalLiteral::from_signed_mantissa(&mantissa, 4).to_string(),
            "-12.3400"
        );
    }

    #[test]
    fn test_round_to_scale_half_up() {
        let n: DecimalLiteral = "1.23456".parse().unwrap();
        assert_eq!(n.round_to_scale(4).to_string(), "1.2346");
        assert_eq!(n.round_to_scale(10).to_string(), "1.23456");

        let n: DecimalLiteral = "-1.25".parse().unwrap();
        assert_eq!(n.round_to_scale(1).to_string(), "-1.3");

        let n: DecimalLiteral = "0.0004".parse().unwrap();
        assert_eq!(n.round_to_scale(3).to_string(), "0.000");
    }

    #[test]
    fn test_small_mantissa_pads_integer_part() {
        let n = DecimalLiteral::from_mantissa(&BigUint::from(7u32), false, 3);
        assert_eq!(n.to_string(), "0.007");
    }
}
