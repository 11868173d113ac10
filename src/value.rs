// ============================================================================
// Decimal Value Types
// Fixed-width decimal floating-point values with a guarded digit budget
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;

/// Decimal floating-point value with at most 7 significant digits.
///
/// Backed by [`rust_decimal::Decimal`]; every instance reachable through the
/// public API has already passed the 7-digit budget check. Values are
/// immutable: every operation produces a new value or an error.
///
/// Storage encoding is 4 bytes, see [`Decimal32::to_bits`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal32(pub(crate) Decimal);

/// Decimal floating-point value with at most 16 significant digits.
///
/// Backed by [`rust_decimal::Decimal`]; every instance reachable through the
/// public API has already passed the 16-digit budget check.
///
/// Storage encoding is 8 bytes, see [`Decimal64::to_bits`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal64(pub(crate) Decimal);

/// Round `d` to at most `digits` significant digits and return the rounded
/// value only if nothing was lost.
///
/// This is the library's core correctness guard: the backing primitive rounds
/// on narrowing instead of signaling, so losslessness is established by
/// comparing the narrowed value against the original. `None` means the value
/// does not fit the budget (or rounding pushed it past the primitive's range).
pub(crate) fn narrow_to_digits(d: Decimal, digits: u32) -> Option<Decimal> {
    let narrowed = d.round_sf(digits)?;
    if narrowed == d {
        Some(narrowed)
    } else {
        None
    }
}

impl Decimal32 {
    /// Significant decimal digits this type may carry.
    pub const DIGITS: u32 = 7;

    /// Width of the storage encoding in bytes.
    pub const STORAGE_BYTES: usize = 4;

    pub(crate) const TYPE_NAME: &'static str = "decimal32";

    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(Decimal::ONE);

    /// Wrap a raw decimal that is already known to fit the digit budget.
    #[inline]
    pub(crate) const fn new_unchecked(inner: Decimal) -> Self {
        Self(inner)
    }

    /// The backing decimal value.
    #[inline]
    pub const fn raw(self) -> Decimal {
        self.0
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Widen to [`Decimal64`]. Always exact: 7 digits fit in 16.
    #[inline]
    pub const fn widen(self) -> Decimal64 {
        Decimal64(self.0)
    }
}

impl Decimal64 {
    /// Significant decimal digits this type may carry.
    pub const DIGITS: u32 = 16;

    /// Width of the storage encoding in bytes.
    pub const STORAGE_BYTES: usize = 8;

    pub(crate) const TYPE_NAME: &'static str = "decimal64";

    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(Decimal::ONE);

    /// Wrap a raw decimal that is already known to fit the digit budget.
    #[inline]
    pub(crate) const fn new_unchecked(inner: Decimal) -> Self {
        Self(inner)
    }

    /// The backing decimal value.
    #[inline]
    pub const fn raw(self) -> Decimal {
        self.0
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal32> for Decimal64 {
    /// Widening is always exact within the two-type system.
    #[inline]
    fn from(value: Decimal32) -> Self {
        value.widen()
    }
}

impl Default for Decimal32 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Default for Decimal64 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// Negation flips the sign bit only; the digit budget is unaffected.
impl Neg for Decimal32 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for Decimal64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Debug for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal32({})", self)
    }
}

impl fmt::Debug for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal64({})", self)
    }
}

// ============================================================================
// Serde (optional)
// Canonical text on the wire; deserialization runs the full parser guard.
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Decimal32, Decimal64};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Decimal32 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for Decimal64 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Decimal32 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Decimal64 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_constants() {
        assert_eq!(Decimal32::DIGITS, 7);
        assert_eq!(Decimal64::DIGITS, 16);
        assert_eq!(Decimal32::STORAGE_BYTES, 4);
        assert_eq!(Decimal64::STORAGE_BYTES, 8);
        assert!(Decimal32::ZERO.is_zero());
        assert!(!Decimal64::ONE.is_zero());
    }

    #[test]
    fn test_equality_ignores_scale() {
        // 1.00 and 1 are the same value
        let a = Decimal32::new_unchecked(Decimal::new(100, 2));
        let b = Decimal32::new_unchecked(Decimal::new(1, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_widen_is_exact() {
        let a = Decimal32::new_unchecked(Decimal::new(9_999_999, 3));
        let wide: Decimal64 = a.into();
        assert_eq!(wide.raw(), a.raw());
    }

    #[test]
    fn test_negation() {
        let a = Decimal32::new_unchecked(Decimal::new(314, 2));
        assert!((-a).is_negative());
        assert_eq!(-(-a), a);
        assert!(!(-Decimal64::ZERO).is_negative());
    }

    #[test]
    fn test_narrow_to_digits_exact_fit() {
        // 3.140000 carries seven mantissa digits but only three significant ones
        let d = Decimal::new(3_140_000, 6);
        assert_eq!(narrow_to_digits(d, 7), Some(Decimal::new(3_140_000, 6)));
    }

    #[test]
    fn test_narrow_to_digits_rejects_loss() {
        let d = Decimal::new(12_345_678, 0);
        assert_eq!(narrow_to_digits(d, 7), None);
        assert!(narrow_to_digits(d, 16).is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_canonical_text() {
        let v: Decimal32 = "3.140000".parse().unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"3.14\"");
        assert_eq!(serde_json::from_str::<Decimal32>(&json).unwrap(), v);

        // Deserialization runs the full parser guard
        assert!(serde_json::from_str::<Decimal32>("\"12345678\"").is_err());
    }
}
