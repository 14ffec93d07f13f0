//! Raw operand text validation and parsing.
//!
//! Turns free-form user text into a [`DecimalLiteral`] or rejects it with
//! a specific error. Blank input is "no value", not an error: callers
//! treat it as missing in two-operand mode and as zero in chained mode.

use crate::decimal::DecimalLiteral;
use crate::error::{CalcError, Result, SpacingError};
use crate::format::group_digits;

/// Parses raw operand text.
///
/// Returns `Ok(None)` for empty or whitespace-only input. Otherwise the
/// text is validated in order: comma decimal separators are normalized to
/// periods, alphabetic content (Latin or Cyrillic) is rejected, a minus
/// sign anywhere but the leading position is rejected, thousands spaces
/// must sit exactly at the canonical grouping positions, and the
/// space-stripped remainder must match
/// `optional '-', digits, optional '.', digits` with at least one digit.
///
/// # Examples
///
/// ```
/// use bignum_calc::parse;
///
/// let n = parse("1 234,5").unwrap().unwrap();
/// assert_eq!(n.to_string(), "1234.5");
/// assert!(parse("   ").unwrap().is_none());
/// assert!(parse("12 34").is_err());
/// ```
pub fn parse(text: &str) -> Result<Option<DecimalLiteral>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let normalized = text.replace(',', ".");

    if normalized.chars().any(is_rejected_letter) {
        return Err(CalcError::InvalidCharacters);
    }
    if normalized.char_indices().any(|(i, c)| c == '-' && i > 0) {
        return Err(CalcError::MisplacedSign);
    }
    if normalized.contains(' ') {
        check_spacing(&normalized)?;
    }

    let compact: String = normalized.chars().filter(|c| *c != ' ').collect();
    parse_compact(&compact).map(Some)
}

/// Latin and Cyrillic letters are rejected explicitly; anything else
/// non-numeric falls through to the format check.
fn is_rejected_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Validates spaces as thousands-group separators.
///
/// Spaces are legal only between integer digits, and only at the exact
/// positions the canonical right-to-left every-3-digits grouping would
/// produce. Each violation gets its own [`SpacingError`] kind.
fn check_spacing(text: &str) -> Result<()> {
    if text.contains("  ") {
        return Err(SpacingError::DoubleSpace.into());
    }
    if text.starts_with(' ') || text.ends_with(' ') {
        return Err(SpacingError::EdgeSpace.into());
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if frac_part.is_some_and(|f| f.contains(' ')) {
        return Err(SpacingError::FractionSpace.into());
    }

    let digits: String = int_part.chars().filter(|c| *c != ' ').collect();
    if group_digits(&digits) != int_part {
        return Err(SpacingError::WrongGrouping.into());
    }

    Ok(())
}

/// Matches the space-free text against the numeric-literal pattern and
/// splits it into a normalized literal.
fn parse_compact(text: &str) -> Result<DecimalLiteral> {
    let negative = text.starts_with('-');
    let body = text.strip_prefix('-').unwrap_or(text);
    if body.is_empty() {
        return Err(CalcError::InvalidFormat);
    }

    let (int_part, frac_part) = match body.split_once('.') {
        // a dot requires at least one fraction digit ("5." is invalid)
        Some((_, "")) => return Err(CalcError::InvalidFormat),
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    let all_digits =
        int_part.bytes().all(|b| b.is_ascii_digit()) && frac_part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits || (int_part.is_empty() && frac_part.is_empty()) {
        return Err(CalcError::InvalidFormat);
    }

    Ok(DecimalLiteral::from_parts(negative, int_part, frac_part))
}
