//! Human-readable rendering of computed results.
//!
//! Results are displayed with at most six fraction digits (trailing zeros
//! trimmed) and with the integer part grouped into thousands by single
//! spaces. The grouping helper is shared with the parser, which accepts
//! space-grouped input only when the spaces sit exactly where this module
//! would put them.

use crate::decimal::DecimalLiteral;

/// Maximum number of fraction digits shown in formatted output.
pub const DISPLAY_FRACTION_DIGITS: usize = 6;

/// Renders a literal as grouped, trimmed display text.
///
/// The fraction is truncated (not rounded) to [`DISPLAY_FRACTION_DIGITS`]
/// and stripped of trailing zeros; an empty fraction drops its separator.
/// A magnitude that truncates to zero is never shown with a minus sign.
///
/// # Examples
///
/// ```
/// use bignum_calc::{format_result, DecimalLiteral};
///
/// let n: DecimalLiteral = "1234567.890000".parse().unwrap();
/// assert_eq!(format_result(&n), "1 234 567.89");
/// ```
pub fn format_result(value: &DecimalLiteral) -> String {
    let frac = value.frac_digits();
    let frac = &frac[..frac.len().min(DISPLAY_FRACTION_DIGITS)];
    let frac = frac.trim_end_matches('0');

    let mut out = String::new();
    if value.negative() && !(value.int_digits() == "0" && frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(value.int_digits()));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Groups a digit string right-to-left into blocks of three, separated by
/// single spaces. A lone `"0"` is never grouped.
pub fn group_digits(digits: &str) -> String {
    if digits == "0" {
        return digits.to_string();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> DecimalLiteral {
        s.parse().unwrap()
    }

    #[test]
    fn test_group_digits_every_three_from_the_right() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1 234");
        assert_eq!(group_digits("1234567"), "1 234 567");
        assert_eq!(group_digits("123456"), "123 456");
    }

    #[test]
    fn test_zero_is_never_grouped() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(format_result(&lit("0")), "0");
    }

    #[test]
    fn test_fraction_truncated_to_six_digits() {
        assert_eq!(format_result(&lit("0.123456789")), "0.123456");
        assert_eq!(format_result(&lit("2.5000000000")), "2.5");
    }

    #[test]
    fn test_trailing_zeros_trimmed_and_separator_dropped() {
        assert_eq!(format_result(&lit("3.140000")), "3.14");
        assert_eq!(format_result(&lit("5.000000")), "5");
    }

    #[test]
    fn test_negative_sign_reattached() {
        assert_eq!(format_result(&lit("-1234.50")), "-1 234.5");
    }

    #[test]
    fn test_magnitude_truncating_to_zero_loses_the_sign() {
        // -0.0000001 has no visible digits at six places; "-0" is never shown
        assert_eq!(format_result(&lit("-0.0000001")), "0");
    }
}
