// ============================================================================
// decguard
// Fixed-width decimal floating-point types with explicit overflow detection
// ============================================================================

//! # decguard
//!
//! Two fixed-width decimal floating-point value types with a guarded digit
//! budget:
//!
//! - [`Decimal32`]: at most 7 significant decimal digits, 4-byte storage
//!   encoding.
//! - [`Decimal64`]: at most 16 significant decimal digits, 8-byte storage
//!   encoding.
//!
//! Every operation detects when a result cannot be represented exactly within
//! the target type's digit budget and rejects it instead of silently
//! truncating. The backing arithmetic is [`rust_decimal`]; this crate wraps
//! and guards it, it does not reimplement decimal arithmetic.
//!
//! ## Features
//!
//! - **Parsing and formatting** with a canonical fixed-point text form:
//!   `parse(format(v)) == v` for every representable value.
//! - **Arithmetic** with per-operation overflow policies (inverse-check
//!   detection for 16-digit addition and multiplication).
//! - **Casts** between the two types, binary floats, binary integers, and an
//!   arbitrary-precision numeric collaborator reachable only through text.
//! - **Scale-based rounding**, ties away from zero.
//! - **Storage codec**: IEEE 754-2008 BID bit layouts (4 / 8 bytes).
//!
//! ## Example
//!
//! ```rust
//! use decguard::{Decimal32, Decimal64, DecimalError};
//!
//! let price: Decimal32 = "3.140000".parse()?;
//! assert_eq!(price.to_string(), "3.14");
//!
//! // Decimal32 arithmetic widens and stays wide
//! let total: Decimal64 = price + price;
//! assert_eq!(total.to_string(), "6.28");
//!
//! // Eight significant digits do not fit the 7-digit budget
//! let err = "12345678".parse::<Decimal32>().unwrap_err();
//! assert_eq!(err.to_string(), "decimal32 out of range");
//! assert_eq!(err.hint().unwrap(), "allows only 7 digits");
//! # Ok::<_, DecimalError>(())
//! ```

mod arith;
mod codec;
mod convert;
mod error;
mod format;
mod parse;
mod round;
mod value;

pub use convert::{
    decimal64_to_numeric, numeric_to_decimal32, numeric_to_decimal64, NumericText,
};
pub use error::{DecimalError, DecimalResult};
pub use parse::{parse_decimal32, parse_decimal64};
pub use value::{Decimal32, Decimal64};
