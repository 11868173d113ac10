// ============================================================================
// Conversion Layer
// Casts between the decimal types, binary numbers, and the numeric collaborator
// ============================================================================
//
// Every narrowing conversion is guarded the same way: convert, convert back,
// and require equality with the original. Mismatch is OutOfRange naming the
// destination type's digit budget.

use crate::error::{DecimalError, DecimalResult};
use crate::parse::{parse_decimal32, parse_decimal64};
use crate::value::{narrow_to_digits, Decimal32, Decimal64};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

impl Decimal64 {
    /// Narrow to [`Decimal32`].
    ///
    /// # Errors
    /// [`DecimalError::OutOfRange`] when the value does not fit 7 significant
    /// digits.
    pub fn to_decimal32(self) -> DecimalResult<Decimal32> {
        match narrow_to_digits(self.0, Decimal32::DIGITS) {
            Some(narrowed) => Ok(Decimal32::new_unchecked(narrowed)),
            None => {
                tracing::debug!(value = %self, "decimal64 -> decimal32 narrowing rejected");
                Err(DecimalError::out_of_range(
                    Decimal32::TYPE_NAME,
                    Decimal32::DIGITS,
                ))
            },
        }
    }
}

/// Guarded integer conversion shared by the `TryFrom` impls.
fn integer_to_budget(
    value: i64,
    type_name: &'static str,
    digits: u32,
) -> DecimalResult<Decimal> {
    narrow_to_digits(Decimal::from(value), digits)
        .ok_or_else(|| DecimalError::out_of_range(type_name, digits))
}

impl TryFrom<i32> for Decimal32 {
    type Error = DecimalError;

    fn try_from(value: i32) -> DecimalResult<Self> {
        integer_to_budget(value.into(), Self::TYPE_NAME, Self::DIGITS).map(Self::new_unchecked)
    }
}

impl TryFrom<i64> for Decimal32 {
    type Error = DecimalError;

    fn try_from(value: i64) -> DecimalResult<Self> {
        integer_to_budget(value, Self::TYPE_NAME, Self::DIGITS).map(Self::new_unchecked)
    }
}

impl TryFrom<i32> for Decimal64 {
    type Error = DecimalError;

    fn try_from(value: i32) -> DecimalResult<Self> {
        integer_to_budget(value.into(), Self::TYPE_NAME, Self::DIGITS).map(Self::new_unchecked)
    }
}

impl TryFrom<i64> for Decimal64 {
    type Error = DecimalError;

    fn try_from(value: i64) -> DecimalResult<Self> {
        integer_to_budget(value, Self::TYPE_NAME, Self::DIGITS).map(Self::new_unchecked)
    }
}

impl TryFrom<f32> for Decimal32 {
    type Error = DecimalError;

    /// Convert a single-precision binary float.
    ///
    /// The float's decimal rendering is narrowed to 7 digits, converted back
    /// to `f32`, and compared bit-for-value with the original.
    fn try_from(value: f32) -> DecimalResult<Self> {
        let out_of_range = || DecimalError::out_of_range(Self::TYPE_NAME, Self::DIGITS);

        let d = Decimal::from_f32(value).ok_or_else(out_of_range)?;
        let narrowed = narrow_to_digits(d, Self::DIGITS).ok_or_else(out_of_range)?;
        if narrowed.to_f32() != Some(value) {
            return Err(out_of_range());
        }
        Ok(Self::new_unchecked(narrowed))
    }
}

impl TryFrom<f64> for Decimal64 {
    type Error = DecimalError;

    /// Convert a double-precision binary float.
    ///
    /// Same guard as the `f32` conversion, with a 16-digit budget.
    fn try_from(value: f64) -> DecimalResult<Self> {
        let out_of_range = || DecimalError::out_of_range(Self::TYPE_NAME, Self::DIGITS);

        let d = Decimal::from_f64(value).ok_or_else(out_of_range)?;
        let narrowed = narrow_to_digits(d, Self::DIGITS).ok_or_else(out_of_range)?;
        if narrowed.to_f64() != Some(value) {
            return Err(out_of_range());
        }
        Ok(Self::new_unchecked(narrowed))
    }
}

// ============================================================================
// Arbitrary-Precision Numeric Collaborator
// ============================================================================

/// The arbitrary-precision numeric collaborator, reachable only through its
/// own canonical text input/output. This library never inspects the
/// collaborator's internal representation.
pub trait NumericText: Sized {
    /// Error raised by the collaborator's own parser.
    type Error;

    /// Parse the collaborator's canonical text form.
    fn from_numeric_text(text: &str) -> Result<Self, Self::Error>;

    /// Render the collaborator's canonical text form.
    fn to_numeric_text(&self) -> String;
}

/// Convert a [`Decimal64`] to the numeric collaborator: format to canonical
/// text, then hand the text to the collaborator's parser.
pub fn decimal64_to_numeric<N: NumericText>(value: Decimal64) -> Result<N, N::Error> {
    N::from_numeric_text(&value.to_string())
}

/// Convert from the numeric collaborator to a [`Decimal64`]: ask the
/// collaborator for its text rendering, then run this library's parser on it.
pub fn numeric_to_decimal64<N: NumericText>(value: &N) -> DecimalResult<Decimal64> {
    parse_decimal64(&value.to_numeric_text())
}

/// Convert from the numeric collaborator to a [`Decimal32`].
pub fn numeric_to_decimal32<N: NumericText>(value: &N) -> DecimalResult<Decimal32> {
    parse_decimal32(&value.to_numeric_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_decimal32, parse_decimal64};

    /// Test double for the collaborator: arbitrary-precision enough for the
    /// canonical forms exercised here, consumed strictly through text.
    #[derive(Debug, PartialEq)]
    struct Numeric(String);

    impl NumericText for Numeric {
        type Error = DecimalError;

        fn from_numeric_text(text: &str) -> Result<Self, Self::Error> {
            if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || "+-.".contains(c)) {
                return Err(DecimalError::invalid_syntax("numeric", text));
            }
            Ok(Numeric(text.to_string()))
        }

        fn to_numeric_text(&self) -> String {
            self.0.clone()
        }
    }

    #[test]
    fn test_narrowing_in_range() {
        let wide = parse_decimal64("1234.567").unwrap();
        let narrow = wide.to_decimal32().unwrap();
        assert_eq!(narrow.widen(), wide);
    }

    #[test]
    fn test_narrowing_out_of_range() {
        let wide = parse_decimal64("12345678").unwrap();
        let err = wide.to_decimal32().unwrap_err();
        assert_eq!(err, DecimalError::out_of_range("decimal32", 7));
        assert_eq!(err.hint().unwrap(), "allows only 7 digits");
    }

    #[test]
    fn test_widening_is_exact() {
        let narrow = parse_decimal32("9999999").unwrap();
        assert_eq!(Decimal64::from(narrow).to_decimal32().unwrap(), narrow);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(Decimal32::try_from(9_999_999_i32).unwrap().to_string(), "9999999");
        assert_eq!(Decimal32::try_from(-42_i32).unwrap().to_string(), "-42");
        assert!(Decimal32::try_from(12_345_678_i32).is_err());

        // Eight digits with a trailing zero still only carry seven
        assert!(Decimal32::try_from(12_345_670_i64).is_ok());

        assert_eq!(
            Decimal64::try_from(i64::MIN / 1000).unwrap().to_string(),
            "-9223372036854775"
        );
        assert!(Decimal64::try_from(i64::MAX).is_err());
        assert!(Decimal64::try_from(i32::MAX).is_ok());
    }

    #[test]
    fn test_f32_conversion() {
        let v = Decimal32::try_from(2.5_f32).unwrap();
        assert_eq!(v.to_string(), "2.5");

        let v = Decimal32::try_from(-0.125_f32).unwrap();
        assert_eq!(v.to_string(), "-0.125");

        assert!(Decimal32::try_from(f32::NAN).is_err());
        assert!(Decimal32::try_from(f32::INFINITY).is_err());
    }

    #[test]
    fn test_f64_conversion() {
        let v = Decimal64::try_from(1234.5678_f64).unwrap();
        assert_eq!(v.to_string(), "1234.5678");

        // 3.141592653589793 is exactly 16 digits and round-trips
        assert!(Decimal64::try_from(std::f64::consts::PI).is_ok());

        assert!(Decimal64::try_from(f64::NAN).is_err());
        // 0.30000000000000004 needs 17 significant digits
        assert!(Decimal64::try_from(0.1_f64 + 0.2_f64).is_err());
    }

    #[test]
    fn test_numeric_round_trip() {
        let original = parse_decimal64("12345.6789012345").unwrap();
        let numeric: Numeric = decimal64_to_numeric(original).unwrap();
        assert_eq!(numeric.to_numeric_text(), "12345.6789012345");

        let back = numeric_to_decimal64(&numeric).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_numeric_to_decimal32_runs_parser_guard() {
        let numeric = Numeric::from_numeric_text("12345678").unwrap();
        assert!(numeric_to_decimal32(&numeric).is_err());
        assert!(numeric_to_decimal64(&numeric).is_ok());
    }
}
