//! Fixed-point primitives.
//!
//! These are the only functions that touch raw integer multiplication and
//! division. Both round half-up by adding half the divisor before the
//! truncating division, which is the rule the pool contracts use; every
//! higher layer routes its products and quotients through here so quoted
//! numbers match executed ones bit for bit.
//!
//! ```
//! use cmmm_math::domain::ScaledInt;
//! use cmmm_math::math::{div_fixed, mul_fixed};
//!
//! let half = ScaledInt::parse_units("0.5").expect("valid");
//! let three = ScaledInt::from_integer(3);
//! assert_eq!(mul_fixed(three, half), ScaledInt::parse_units("1.5"));
//! assert_eq!(div_fixed(three, half), Ok(ScaledInt::from_integer(6)));
//! ```

use primitive_types::{U256, U512};

use super::constants::BONE;
use crate::domain::{ScaledInt, SignedMagnitude};
use crate::error::{MathError, Result};

/// `round_half_up(a * b / BONE)`.
///
/// The product is formed in 512 bits so it can never wrap.
///
/// # Errors
///
/// Returns [`MathError::ArithmeticOverflow`] if the rounded result does not
/// fit in 256 bits.
pub fn mul_fixed(a: ScaledInt, b: ScaledInt) -> Result<ScaledInt> {
    let bone = U512::from(BONE.get());
    let product = a.get().full_mul(b.get());
    let rounded = product
        .checked_add(bone / U512::from(2u8))
        .ok_or(MathError::ArithmeticOverflow("fixed-point multiplication"))?;
    narrow(rounded / bone, "fixed-point multiplication")
}

/// `round_half_up(a * BONE / b)`.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if `b` is zero.
/// - [`MathError::ArithmeticOverflow`] if the result does not fit in 256 bits.
pub fn div_fixed(a: ScaledInt, b: ScaledInt) -> Result<ScaledInt> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let divisor = U512::from(b.get());
    let scaled = a.get().full_mul(BONE.get());
    let rounded = scaled
        .checked_add(divisor / U512::from(2u8))
        .ok_or(MathError::ArithmeticOverflow("fixed-point division"))?;
    narrow(rounded / divisor, "fixed-point division")
}

/// Truncates `a` to the nearest multiple of `BONE` at or below it.
pub fn floor_to_bone(a: ScaledInt) -> ScaledInt {
    ScaledInt::new(to_integer(a) * BONE.get())
}

/// Integer part of `a`, i.e. `a / BONE` truncated. The result is a plain
/// integer, not a fixed-point value.
#[must_use]
pub fn to_integer(a: ScaledInt) -> U256 {
    a.get() / BONE.get()
}

/// Sign-tracked subtraction `a - b`.
pub fn sub_sign(a: ScaledInt, b: ScaledInt) -> SignedMagnitude {
    SignedMagnitude::difference(a, b)
}

fn narrow(value: U512, context: &'static str) -> Result<ScaledInt> {
    U256::try_from(value)
        .map(ScaledInt::new)
        .map_err(|_| MathError::ArithmeticOverflow(context))
}
