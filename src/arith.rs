// ============================================================================
// Arithmetic Engine
// Add, subtract, multiply, divide with per-operation overflow policies
// ============================================================================
//
// Overflow policy summary:
// - Decimal32 ops widen to Decimal64 and return it; no re-narrowing, no
//   inverse check (7-digit inputs cannot overflow a 16-digit result).
// - Decimal64 addition and multiplication detect overflow with an inverse
//   check: the backing primitive rounds on narrowing instead of signaling,
//   so `(a+b) - a == b` (resp. `(a*b) / a == b`) is the only observable
//   overflow test.
// - Decimal64 subtraction and division skip the inverse check; host-range
//   exhaustion is OutOfRange, division by zero traps.

use crate::error::{DecimalError, DecimalResult};
use crate::value::{Decimal32, Decimal64};
use rust_decimal::Decimal;
use std::ops::{Add, Div, Mul, Sub};

/// Narrow a raw result to the 16-digit budget with banker's rounding.
///
/// This is the narrowing a 16-digit hardware decimal would perform
/// implicitly on every operation result.
fn narrow16(raw: Decimal) -> DecimalResult<Decimal64> {
    raw.round_sf(Decimal64::DIGITS)
        .map(Decimal64::new_unchecked)
        .ok_or_else(|| DecimalError::out_of_range(Decimal64::TYPE_NAME, Decimal64::DIGITS))
}

fn out_of_range16() -> DecimalError {
    DecimalError::out_of_range(Decimal64::TYPE_NAME, Decimal64::DIGITS)
}

impl Decimal64 {
    /// Checked addition.
    ///
    /// Computes `self + rhs` at the 16-digit budget, then verifies
    /// `result - self == rhs` at full backing precision.
    ///
    /// # Errors
    /// [`DecimalError::OutOfRange`] when the sum does not fit 16 significant
    /// digits, or when it exhausts the backing primitive's range.
    pub fn checked_add(self, rhs: Self) -> DecimalResult<Self> {
        let raw = self.0.checked_add(rhs.0).ok_or_else(out_of_range16)?;
        let result = narrow16(raw)?;

        let recovered = result.0.checked_sub(self.0);
        if recovered != Some(rhs.0) {
            tracing::debug!(
                lhs = %self,
                rhs = %rhs,
                "decimal64 addition rejected: inverse check failed"
            );
            return Err(out_of_range16());
        }
        Ok(result)
    }

    /// Checked multiplication.
    ///
    /// Computes `self * rhs` at the 16-digit budget, then verifies
    /// `result / self == rhs`. Zero operands are a degenerate pass: the
    /// product is exactly zero and the inverse division is never attempted.
    ///
    /// # Errors
    /// [`DecimalError::OutOfRange`] when the product does not fit 16
    /// significant digits, or when it exhausts the backing primitive's range.
    pub fn checked_mul(self, rhs: Self) -> DecimalResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }

        let raw = self.0.checked_mul(rhs.0).ok_or_else(out_of_range16)?;
        let result = narrow16(raw)?;

        let recovered = result.0.checked_div(self.0);
        if recovered != Some(rhs.0) {
            tracing::debug!(
                lhs = %self,
                rhs = %rhs,
                "decimal64 multiplication rejected: inverse check failed"
            );
            return Err(out_of_range16());
        }
        Ok(result)
    }

    /// Checked subtraction.
    ///
    /// No inverse check: digits beyond the 16-digit budget round away
    /// silently, matching the backing primitive's behavior.
    ///
    /// # Errors
    /// [`DecimalError::OutOfRange`] when the difference exhausts the backing
    /// primitive's range.
    pub fn checked_sub(self, rhs: Self) -> DecimalResult<Self> {
        let raw = self.0.checked_sub(rhs.0).ok_or_else(out_of_range16)?;
        narrow16(raw)
    }

    /// Checked division.
    ///
    /// No inverse check: the quotient is rounded to the 16-digit budget.
    ///
    /// # Errors
    /// [`DecimalError::OutOfRange`] when the quotient exhausts the backing
    /// primitive's range.
    ///
    /// # Panics
    /// Panics when `rhs` is zero. The division trap is not converted into
    /// an error.
    pub fn checked_div(self, rhs: Self) -> DecimalResult<Self> {
        if rhs.is_zero() {
            // Decimal::checked_div would fold the zero-divisor trap into
            // None; raise it explicitly instead.
            panic!("Division by zero");
        }
        let raw = self.0.checked_div(rhs.0).ok_or_else(out_of_range16)?;
        narrow16(raw)
    }
}

// Operator impls delegate to the checked forms (panics on overflow - use
// checked_* when the caller wants the error).
impl Add for Decimal64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("decimal64 addition out of range")
    }
}

impl Sub for Decimal64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("decimal64 subtraction out of range")
    }
}

impl Mul for Decimal64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("decimal64 multiplication out of range")
    }
}

impl Div for Decimal64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("decimal64 division out of range")
    }
}

// Decimal32 arithmetic widens and stays wide. A 7-digit operand pair cannot
// overflow the 16-digit budget, so there is no inverse check and no
// re-narrowing path back to Decimal32.
impl Add for Decimal32 {
    type Output = Decimal64;

    fn add(self, rhs: Self) -> Self::Output {
        narrow16(self.0 + rhs.0).expect("decimal32 addition out of range")
    }
}

impl Sub for Decimal32 {
    type Output = Decimal64;

    fn sub(self, rhs: Self) -> Self::Output {
        narrow16(self.0 - rhs.0).expect("decimal32 subtraction out of range")
    }
}

impl Mul for Decimal32 {
    type Output = Decimal64;

    fn mul(self, rhs: Self) -> Self::Output {
        narrow16(self.0 * rhs.0).expect("decimal32 multiplication out of range")
    }
}

impl Div for Decimal32 {
    type Output = Decimal64;

    /// # Panics
    /// Panics when `rhs` is zero; the division trap propagates.
    fn div(self, rhs: Self) -> Self::Output {
        narrow16(self.0 / rhs.0).expect("decimal32 division out of range")
    }
}
