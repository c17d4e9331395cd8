//! Checked arithmetic trait for fixed-point values.
//!
//! The [`CheckedArithmetic`] trait gives [`ScaledInt`] fallible operators
//! that return [`Result<Self, MathError>`](crate::error::MathError) instead
//! of panicking or wrapping. Addition and subtraction are plain checked
//! integer operations (scaling is preserved); multiplication and division
//! delegate to [`mul_fixed`] and [`div_fixed`] so they round exactly as the
//! pool contracts do.
//!
//! # Examples
//!
//! ```
//! use cmmm_math::domain::ScaledInt;
//! use cmmm_math::math::CheckedArithmetic;
//!
//! let price = ScaledInt::parse_units("2.5").expect("valid");
//! let qty = ScaledInt::from_integer(4);
//! assert_eq!(price.safe_mul(&qty), Ok(ScaledInt::from_integer(10)));
//! ```

use super::fixed::{div_fixed, mul_fixed};
use crate::domain::ScaledInt;
use crate::error::MathError;

/// Fallible arithmetic for fixed-point values.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
/// - Products and quotients keep the `BONE` scaling.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, MathError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticUnderflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, MathError>;

    /// Fixed-point multiplication, rounded half-up.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, MathError>;

    /// Fixed-point division, rounded half-up.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, MathError>;
}

impl CheckedArithmetic for ScaledInt {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, MathError> {
        self.checked_add(other)
            .ok_or(MathError::ArithmeticOverflow("fixed-point addition"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, MathError> {
        self.checked_sub(other)
            .ok_or(MathError::ArithmeticUnderflow("fixed-point subtraction"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, MathError> {
        mul_fixed(*self, *other)
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, MathError> {
        div_fixed(*self, *other)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn units(s: &str) -> ScaledInt {
        let Ok(v) = ScaledInt::parse_units(s) else {
            panic!("valid decimal {s}");
        };
        v
    }

    // -- safe_add -----------------------------------------------------------

    #[test]
    fn add_ok() {
        let Ok(r) = units("1.25").safe_add(&units("0.75")) else {
            panic!("expected Ok");
        };
        assert_eq!(r, units("2"));
    }

    #[test]
    fn add_overflow() {
        let Err(MathError::ArithmeticOverflow(_)) = ScaledInt::MAX.safe_add(&ScaledInt::from_raw(1))
        else {
            panic!("expected ArithmeticOverflow");
        };
    }

    // -- safe_sub -----------------------------------------------------------

    #[test]
    fn sub_ok() {
        let Ok(r) = units("1").safe_sub(&units("0.003")) else {
            panic!("expected Ok");
        };
        assert_eq!(r, units("0.997"));
    }

    #[test]
    fn sub_underflow() {
        let Err(MathError::ArithmeticUnderflow(_)) = units("1").safe_sub(&units("2")) else {
            panic!("expected ArithmeticUnderflow");
        };
    }

    // -- safe_mul / safe_div ------------------------------------------------

    #[test]
    fn mul_keeps_scale() {
        let Ok(r) = units("0.5").safe_mul(&units("0.5")) else {
            panic!("expected Ok");
        };
        assert_eq!(r, units("0.25"));
    }

    #[test]
    fn div_keeps_scale() {
        let Ok(r) = units("1").safe_div(&units("4")) else {
            panic!("expected Ok");
        };
        assert_eq!(r, units("0.25"));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(
            units("1").safe_div(&ScaledInt::ZERO),
            Err(MathError::DivisionByZero)
        );
    }

    // -- chaining -----------------------------------------------------------

    #[test]
    fn chaining_works() {
        // (1.5 + 2.5) * 3 / 2 - 1 = 5
        let result = units("1.5")
            .safe_add(&units("2.5"))
            .and_then(|v| v.safe_mul(&units("3")))
            .and_then(|v| v.safe_div(&units("2")))
            .and_then(|v| v.safe_sub(&units("1")));
        assert_eq!(result, Ok(units("5")));
    }
}
