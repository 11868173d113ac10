// ============================================================================
// Rounding
// Scale-parameterized rounding to a target number of fractional digits
// ============================================================================

use crate::error::{DecimalError, DecimalResult};
use crate::value::{Decimal32, Decimal64};
use rust_decimal::{Decimal, RoundingStrategy};

// Ties round away from zero, the contract of the C `round()` family.
// Rounding is decimal-native (exponent shifting on the backing primitive)
// rather than binary-float-mediated, so no representation error sneaks in
// near the double-precision limit.
const TIES: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

impl Decimal64 {
    /// Round to `scale` fractional digits, ties away from zero.
    ///
    /// # Errors
    /// [`DecimalError::InvalidParameter`] when `scale` is negative; rounding
    /// above the decimal point is not defined for this type.
    pub fn round_scale(self, scale: i32) -> DecimalResult<Self> {
        if scale < 0 {
            return Err(DecimalError::InvalidParameter {
                message: "scale should be positive number or zero".to_string(),
            });
        }
        Ok(Self::new_unchecked(
            self.0.round_dp_with_strategy(scale as u32, TIES),
        ))
    }
}

impl Decimal32 {
    /// Round to `scale` fractional digits, ties away from zero.
    ///
    /// Negative `scale` is accepted and rounds to a power of ten above the
    /// decimal point: `round_scale(1234567, -3) == 1235000`. Rounding never
    /// adds significant digits, so the result is always a valid `Decimal32`.
    pub fn round_scale(self, scale: i32) -> Self {
        if scale >= 0 {
            return Self::new_unchecked(self.0.round_dp_with_strategy(scale as u32, TIES));
        }

        if scale < -28 {
            // The rounding step exceeds the backing primitive's magnitude
            // range; the only representable multiple of 10^|scale| is zero.
            // A value large enough to round upward instead traps like any
            // other host-range overflow.
            let threshold = Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0);
            if scale == -29 && self.0.abs() >= threshold {
                panic!("decimal32 rounding out of range");
            }
            return Self::ZERO;
        }

        // Shift the target digit into fractional position, round, shift back.
        let factor = Decimal::from_i128_with_scale(10i128.pow(scale.unsigned_abs()), 0);
        let shifted = (self.0 / factor).round_dp_with_strategy(0, TIES);
        Self::new_unchecked(shifted * factor)
    }
}
