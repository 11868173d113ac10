// ============================================================================
// Formatter
// Decimal value -> canonical fixed-point text
// ============================================================================

use crate::value::{Decimal32, Decimal64};
use rust_decimal::Decimal;
use std::fmt;

/// Render the canonical form: fixed-point, never exponential, insignificant
/// trailing fractional zeros removed, and the decimal point removed when the
/// whole fraction is zero. Integer renderings are left untouched.
///
/// `parse(format(v))` reproduces `v` exactly for every representable `v`.
fn write_canonical(f: &mut fmt::Formatter<'_>, value: &Decimal) -> fmt::Result {
    // normalize() strips trailing zero digits of the fraction; the backing
    // Display is always fixed-point.
    write!(f, "{}", value.normalize())
}

impl fmt::Display for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, &self.0)
    }
}

impl fmt::Display for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, &self.0)
    }
}
