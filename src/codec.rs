// ============================================================================
// Bit Codec
// Reversible mapping between a decimal value and its fixed-width storage form
// ============================================================================
//
// IEEE 754-2008 BID (binary integer significand) layouts: 4 bytes for
// Decimal32, 8 bytes for Decimal64. Two coefficient forms per width:
//
//   s eeeeeeee ccc...c      coefficient fits below the high-bit threshold
//   s 11 eeeeeeee cc...c    large coefficient, implicit `100` prefix
//
// Encoding canonicalizes the significand (trailing zero digits move into the
// exponent), so each value has exactly one bit pattern. No validation happens
// here: values were validated at construction, and the encoded bytes are not
// independently meaningful outside this library. `from_bits` trusts that its
// input was produced by `to_bits`.

use crate::value::{Decimal32, Decimal64};
use rust_decimal::Decimal;

const BID32_SIGN: u32 = 1 << 31;
const BID32_SPECIAL: u32 = 0b11 << 29;
const BID32_BIAS: i32 = 101;
// Long form: 8-bit exponent, 23-bit coefficient field
const BID32_COEFF_BITS: u32 = 23;
// Short form: implicit `100` prefix over a 21-bit field
const BID32_SHORT_BITS: u32 = 21;

const BID64_SIGN: u64 = 1 << 63;
const BID64_SPECIAL: u64 = 0b11 << 61;
const BID64_BIAS: i32 = 398;
const BID64_COEFF_BITS: u32 = 53;
const BID64_SHORT_BITS: u32 = 51;

/// Split a backing decimal into (negative, coefficient, exponent) with the
/// coefficient stripped of trailing zero digits.
fn unpack(d: Decimal) -> (bool, u128, i32) {
    let mut coeff = d.mantissa().unsigned_abs();
    let mut exponent = -(d.scale() as i32);

    if coeff == 0 {
        return (false, 0, 0);
    }
    while coeff % 10 == 0 {
        coeff /= 10;
        exponent += 1;
    }
    (d.is_sign_negative(), coeff, exponent)
}

/// Reassemble the backing decimal from codec parts.
fn pack(negative: bool, coeff: u128, exponent: i32) -> Decimal {
    let signed = if negative { -(coeff as i128) } else { coeff as i128 };
    if exponent >= 0 {
        Decimal::from_i128_with_scale(signed * 10i128.pow(exponent as u32), 0)
    } else {
        Decimal::from_i128_with_scale(signed, exponent.unsigned_abs())
    }
}

impl Decimal32 {
    /// Encode to the 4-byte BID32 storage form.
    pub fn to_bits(self) -> u32 {
        let (negative, coeff, exponent) = unpack(self.0);
        let coeff = coeff as u32;
        let biased = (exponent + BID32_BIAS) as u32;
        // Scale-bounded exponents never reach the `11` marker bits of the
        // long form's exponent field
        debug_assert!(biased < 0b1100_0000);
        let sign = if negative { BID32_SIGN } else { 0 };

        if coeff < (1 << BID32_COEFF_BITS) {
            sign | (biased << BID32_COEFF_BITS) | coeff
        } else {
            sign | BID32_SPECIAL
                | (biased << BID32_SHORT_BITS)
                | (coeff & ((1 << BID32_SHORT_BITS) - 1))
        }
    }

    /// Decode from the 4-byte BID32 storage form.
    ///
    /// Exact inverse of [`Decimal32::to_bits`] for every value of the type.
    pub fn from_bits(bits: u32) -> Self {
        let negative = bits & BID32_SIGN != 0;
        let (biased, coeff) = if bits & BID32_SPECIAL == BID32_SPECIAL {
            (
                (bits >> BID32_SHORT_BITS) & 0xFF,
                (1 << BID32_COEFF_BITS) | (bits & ((1 << BID32_SHORT_BITS) - 1)),
            )
        } else {
            (
                (bits >> BID32_COEFF_BITS) & 0xFF,
                bits & ((1 << BID32_COEFF_BITS) - 1),
            )
        };
        let exponent = biased as i32 - BID32_BIAS;
        Self::new_unchecked(pack(negative, coeff as u128, exponent))
    }

    /// Encode to native-endian storage bytes.
    pub fn to_ne_bytes(self) -> [u8; 4] {
        self.to_bits().to_ne_bytes()
    }

    /// Decode from native-endian storage bytes.
    pub fn from_ne_bytes(bytes: [u8; 4]) -> Self {
        Self::from_bits(u32::from_ne_bytes(bytes))
    }
}

impl Decimal64 {
    /// Encode to the 8-byte BID64 storage form.
    pub fn to_bits(self) -> u64 {
        let (negative, coeff, exponent) = unpack(self.0);
        let coeff = coeff as u64;
        let biased = (exponent + BID64_BIAS) as u64;
        debug_assert!(biased < 0b11_0000_0000);
        let sign = if negative { BID64_SIGN } else { 0 };

        if coeff < (1 << BID64_COEFF_BITS) {
            sign | (biased << BID64_COEFF_BITS) | coeff
        } else {
            sign | BID64_SPECIAL
                | (biased << BID64_SHORT_BITS)
                | (coeff & ((1 << BID64_SHORT_BITS) - 1))
        }
    }

    /// Decode from the 8-byte BID64 storage form.
    ///
    /// Exact inverse of [`Decimal64::to_bits`] for every value of the type.
    pub fn from_bits(bits: u64) -> Self {
        let negative = bits & BID64_SIGN != 0;
        let (biased, coeff) = if bits & BID64_SPECIAL == BID64_SPECIAL {
            (
                (bits >> BID64_SHORT_BITS) & 0x3FF,
                (1 << BID64_COEFF_BITS) | (bits & ((1 << BID64_SHORT_BITS) - 1)),
            )
        } else {
            (
                (bits >> BID64_COEFF_BITS) & 0x3FF,
                bits & ((1 << BID64_COEFF_BITS) - 1),
            )
        };
        let exponent = biased as i32 - BID64_BIAS;
        Self::new_unchecked(pack(negative, coeff as u128, exponent))
    }

    /// Encode to native-endian storage bytes.
    pub fn to_ne_bytes(self) -> [u8; 8] {
        self.to_bits().to_ne_bytes()
    }

    /// Decode from native-endian storage bytes.
    pub fn from_ne_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(u64::from_ne_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_decimal32, parse_decimal64};

    #[test]
    fn test_bid32_round_trip() {
        for text in [
            "0", "1", "-1", "3.14", "-0.0000001", "9999999", "-9999999",
            "0.5", "1234567", "1.2345e28", "7e-28",
        ] {
            let v = parse_decimal32(text).unwrap();
            assert_eq!(Decimal32::from_bits(v.to_bits()), v, "value {}", text);
            assert_eq!(Decimal32::from_ne_bytes(v.to_ne_bytes()), v, "value {}", text);
        }
    }

    #[test]
    fn test_bid64_round_trip() {
        for text in [
            "0", "1", "-1", "2.345", "9999999999999999", "-9999999999999999",
            "1234567890123456", "0.0000000000000001", "9.999999999999999e27",
        ] {
            let v = parse_decimal64(text).unwrap();
            assert_eq!(Decimal64::from_bits(v.to_bits()), v, "value {}", text);
            assert_eq!(Decimal64::from_ne_bytes(v.to_ne_bytes()), v, "value {}", text);
        }
    }

    #[test]
    fn test_bid32_known_patterns() {
        // 1 = coefficient 1, exponent 0, long form: biased exponent 101
        assert_eq!(Decimal32::ONE.to_bits(), (101 << 23) | 1);
        assert_eq!(Decimal32::ZERO.to_bits(), 101 << 23);

        // Sign bit only differs between v and -v
        let v = parse_decimal32("42.5").unwrap();
        assert_eq!(v.to_bits() ^ (-v).to_bits(), 1 << 31);
    }

    #[test]
    fn test_bid32_short_form_marker() {
        // 9999999 overflows the 23-bit coefficient field, forcing the
        // implicit-prefix form
        let v = parse_decimal32("9999999").unwrap();
        assert_eq!(v.to_bits() >> 29 & 0b11, 0b11);

        let small = parse_decimal32("1234567").unwrap();
        assert_ne!(small.to_bits() >> 29 & 0b11, 0b11);
    }

    #[test]
    fn test_canonical_single_pattern() {
        // 0.5 and 0.5000 are the same value and must share one bit pattern
        let a = parse_decimal32("0.5").unwrap();
        let b = parse_decimal32("0.5000").unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_bid64_short_form_threshold() {
        // 2^53 = 9007199254740992 is the first coefficient needing the
        // implicit prefix
        let below = parse_decimal64("9007199254740991").unwrap();
        assert_ne!(below.to_bits() >> 61 & 0b11, 0b11);

        let at = parse_decimal64("9007199254740992").unwrap();
        assert_eq!(at.to_bits() >> 61 & 0b11, 0b11);
        assert_eq!(Decimal64::from_bits(at.to_bits()), at);
    }
}
