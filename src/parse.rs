// ============================================================================
// Parser
// Text -> decimal value, with range/precision validation
// ============================================================================

use crate::error::{DecimalError, DecimalResult};
use crate::value::{narrow_to_digits, Decimal32, Decimal64};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse text into a [`Decimal32`].
///
/// The text is parsed at the full precision of the backing primitive and then
/// narrowed to the 7-digit budget. Two failure modes, both reported:
///
/// - [`DecimalError::InvalidSyntax`] when the text is not a numeral
///   (garbage, empty string).
/// - [`DecimalError::OutOfRange`] when the parsed value does not survive the
///   narrow-and-compare guard. Truncation is never silent.
///
/// # Examples
/// - `"3.140000"` -> 3.14
/// - `"-1.5e3"` -> -1500
/// - `"12345678"` -> `OutOfRange` (8 significant digits)
pub fn parse_decimal32(text: &str) -> DecimalResult<Decimal32> {
    let wide = parse_raw(text, Decimal32::TYPE_NAME, Decimal32::DIGITS)?;
    match narrow_to_digits(wide, Decimal32::DIGITS) {
        Some(narrowed) => Ok(Decimal32::new_unchecked(narrowed)),
        None => {
            tracing::debug!(input = text, "decimal32 parse rejected: precision loss");
            Err(DecimalError::out_of_range(
                Decimal32::TYPE_NAME,
                Decimal32::DIGITS,
            ))
        },
    }
}

/// Parse text into a [`Decimal64`].
///
/// Same contract as [`parse_decimal32`] with a 16-digit budget.
pub fn parse_decimal64(text: &str) -> DecimalResult<Decimal64> {
    let wide = parse_raw(text, Decimal64::TYPE_NAME, Decimal64::DIGITS)?;
    match narrow_to_digits(wide, Decimal64::DIGITS) {
        Some(narrowed) => Ok(Decimal64::new_unchecked(narrowed)),
        None => {
            tracing::debug!(input = text, "decimal64 parse rejected: precision loss");
            Err(DecimalError::out_of_range(
                Decimal64::TYPE_NAME,
                Decimal64::DIGITS,
            ))
        },
    }
}

/// Parse at full backing precision.
///
/// Syntax is validated first, so a parse failure past that point means the
/// magnitude or scale exhausted the backing primitive, which is an
/// out-of-range condition rather than a syntax one.
fn parse_raw(text: &str, type_name: &'static str, digits: u32) -> DecimalResult<Decimal> {
    if !is_numeral(text) {
        return Err(DecimalError::invalid_syntax(type_name, text));
    }

    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let parsed = if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(unsigned)
    } else {
        // "5." is a valid numeral but not accepted by the backing parser
        let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);
        Decimal::from_str(unsigned)
    };
    parsed.map_err(|_| DecimalError::out_of_range(type_name, digits))
}

/// Validate the accepted numeral grammar: optional sign, digits with at most
/// one decimal point (at least one digit overall), optional exponent part.
/// No whitespace, no locale separators, no non-finite spellings.
fn is_numeral(text: &str) -> bool {
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    let mut digits = 0;
    let mut seen_point = false;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    if digits == 0 {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.chars().all(|c| c.is_ascii_digit())
        },
    }
}

impl FromStr for Decimal32 {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal32(s)
    }
}

impl FromStr for Decimal64 {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal64(s)
    }
}
