//! Error types for the calculator.

use std::fmt;
use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while validating input or evaluating.
///
/// Every variant is a local validation failure; nothing here is fatal.
/// The CLI converts them to user-facing messages on stderr.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required operand field was blank in two-operand mode
    #[error("please enter both numbers")]
    MissingOperand,

    /// Input does not match the numeric-literal pattern
    #[error("invalid number format")]
    InvalidFormat,

    /// Alphabetic content detected in a number
    #[error("letters are not allowed in a number")]
    InvalidCharacters,

    /// Minus sign somewhere other than the leading position
    #[error("a minus sign is only allowed at the start of a number")]
    MisplacedSign,

    /// Malformed thousands separators
    #[error("invalid thousands spacing: {0}")]
    Spacing(#[from] SpacingError),

    /// Magnitude outside the supported bound
    #[error(
        "{0} is outside the supported range of \
         -1,000,000,000,000.000000 to +1,000,000,000,000.000000"
    )]
    RangeExceeded(RangeContext),

    /// Divisor magnitude is exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// An operator token was not one of the closed operator set
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Malformed command line
    #[error(
        "usage: bignum-calc <a> <op> <b> | \
         bignum-calc <a> <op1> <b> <op2> <c> <op3> <d> [--round <math|bank|truncate>]"
    )]
    Usage,
}

/// The specific way a space-grouped number was malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingError {
    /// Two consecutive spaces
    #[error("two consecutive spaces")]
    DoubleSpace,

    /// A space inside the fractional part
    #[error("a space inside the fractional part")]
    FractionSpace,

    /// Spaces present but not at the canonical every-3-digits positions
    #[error("spaces do not match thousands grouping")]
    WrongGrouping,

    /// A leading or trailing space
    #[error("a leading or trailing space")]
    EdgeSpace,
}

/// Where a range violation was detected. Operand, intermediate and final
/// overflows are reported distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeContext {
    Operand,
    Intermediate,
    Final,
}

impl fmt::Display for RangeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RangeContext::Operand => "an operand",
            RangeContext::Intermediate => "an intermediate result",
            RangeContext::Final => "the final result",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_names_the_exact_bound() {
        let msg = CalcError::RangeExceeded(RangeContext::Operand).to_string();
        assert!(msg.contains("-1,000,000,000,000.000000"));
        assert!(msg.contains("+1,000,000,000,000.000000"));
        assert!(msg.starts_with("an operand"));
    }

    #[test]
    fn test_spacing_errors_stay_distinguishable() {
        let double: CalcError = SpacingError::DoubleSpace.into();
        let edge: CalcError = SpacingError::EdgeSpace.into();
        assert_ne!(double, edge);
        assert!(double.to_string().contains("consecutive"));
    }
}
