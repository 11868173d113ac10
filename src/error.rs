// ============================================================================
// Decimal Errors
// Error types for guarded decimal operations
// ============================================================================

use std::fmt;

/// Errors raised by parsing, arithmetic, conversion and rounding.
///
/// Every fallible operation in this crate returns exactly one of these three
/// kinds. There is no partial-result or warning path: an operation either
/// yields a fully valid value or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text is not a valid numeral.
    InvalidSyntax {
        /// Name of the type that was being parsed ("decimal32" / "decimal64").
        type_name: &'static str,
        /// The offending input text.
        input: String,
    },
    /// A value cannot be represented within the type's digit budget
    /// without loss.
    OutOfRange {
        /// Name of the type the value was destined for.
        type_name: &'static str,
        /// The digit budget of that type (7 or 16).
        digits: u32,
    },
    /// A caller-supplied parameter is outside its valid domain.
    InvalidParameter {
        /// Human-readable description of the violated constraint.
        message: String,
    },
}

impl DecimalError {
    pub(crate) fn out_of_range(type_name: &'static str, digits: u32) -> Self {
        DecimalError::OutOfRange { type_name, digits }
    }

    pub(crate) fn invalid_syntax(type_name: &'static str, input: &str) -> Self {
        DecimalError::InvalidSyntax {
            type_name,
            input: input.to_string(),
        }
    }

    /// Additional hint for `OutOfRange` errors, naming the digit budget
    /// of the type that rejected the value.
    pub fn hint(&self) -> Option<String> {
        match self {
            DecimalError::OutOfRange { digits, .. } => {
                Some(format!("allows only {} digits", digits))
            },
            _ => None,
        }
    }
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidSyntax { type_name, input } => {
                write!(f, "invalid input syntax for type {}: \"{}\"", type_name, input)
            },
            DecimalError::OutOfRange { type_name, .. } => {
                write!(f, "{} out of range", type_name)
            },
            DecimalError::InvalidParameter { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = DecimalError::out_of_range("decimal64", 16);
        assert_eq!(err.to_string(), "decimal64 out of range");
        assert_eq!(err.hint().unwrap(), "allows only 16 digits");
    }

    #[test]
    fn test_invalid_syntax_display() {
        let err = DecimalError::invalid_syntax("decimal32", "12abc");
        assert_eq!(
            err.to_string(),
            "invalid input syntax for type decimal32: \"12abc\""
        );
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = DecimalError::InvalidParameter {
            message: "scale should be positive number or zero".to_string(),
        };
        assert_eq!(err.to_string(), "scale should be positive number or zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DecimalError::out_of_range("decimal32", 7),
            DecimalError::out_of_range("decimal32", 7)
        );
        assert_ne!(
            DecimalError::out_of_range("decimal32", 7),
            DecimalError::out_of_range("decimal64", 16)
        );
    }
}
