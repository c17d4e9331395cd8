//! Fixed-point exponentiation.
//!
//! [`pow_with`] splits an exponent into its integer and fractional parts.
//! The integer part goes through [`pow_int`] (exponentiation by squaring,
//! exact up to per-step rounding). The fractional part goes through
//! [`pow_approx`], a truncated binomial series for `(1 + x)^a` around
//! `x = base - 1`:
//!
//! ```text
//! (1 + x)^a = 1 + a·x + a(a-1)/2!·x² + a(a-1)(a-2)/3!·x³ + …
//! ```
//!
//! Each term is derived from the previous one as
//! `term_k = term_{k-1} · (a - (k-1)) · x / k`, with the sign of `(a - (k-1))`
//! and of `x` tracked separately because all values are unsigned.

use primitive_types::U256;
use tracing::{trace, warn};

use super::constants::BONE;
use super::fixed::{div_fixed, floor_to_bone, mul_fixed, sub_sign, to_integer};
use crate::config::PowConfig;
use crate::domain::ScaledInt;
use crate::error::{MathError, Result};

/// Raises a fixed-point `base` to a non-negative integer power by
/// repeated squaring, every product going through [`mul_fixed`].
///
/// `exponent == 0` yields `BONE`.
///
/// # Errors
///
/// Returns [`MathError::ArithmeticOverflow`] if an intermediate square or
/// product exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::ScaledInt;
/// use cmmm_math::math::pow_int;
/// use primitive_types::U256;
///
/// let two = ScaledInt::from_integer(2);
/// assert_eq!(pow_int(two, U256::from(10u8)), Ok(ScaledInt::from_integer(1024)));
/// ```
pub fn pow_int(base: ScaledInt, exponent: U256) -> Result<ScaledInt> {
    let two = U256::from(2u8);
    let mut a = base;
    let mut n = exponent;
    let mut z = if n.bit(0) { base } else { BONE };

    n = n / two;
    while !n.is_zero() {
        a = mul_fixed(a, a)?;
        if n.bit(0) {
            z = mul_fixed(z, a)?;
        }
        n = n / two;
    }
    Ok(z)
}

/// [`pow_with`] using the default [`PowConfig`].
///
/// # Errors
///
/// See [`pow_with`].
pub fn pow(base: ScaledInt, exponent: ScaledInt) -> Result<ScaledInt> {
    pow_with(base, exponent, &PowConfig::default())
}

/// Raises a fixed-point `base` to a non-negative fixed-point `exponent`.
///
/// When the exponent is a whole multiple of `BONE` the series is skipped
/// entirely and the result is exactly `pow_int(base, exponent / BONE)`.
///
/// # Errors
///
/// - [`MathError::ArithmeticOverflow`] from the integer power or the final
///   product.
/// - [`MathError::ConvergenceExceeded`] if the fractional series needs more
///   than `config.max_iterations()` terms (bases far from `1.0`).
pub fn pow_with(base: ScaledInt, exponent: ScaledInt, config: &PowConfig) -> Result<ScaledInt> {
    let whole = floor_to_bone(exponent);
    // whole <= exponent by construction
    let remain = ScaledInt::new(exponent.get() - whole.get());
    let whole_pow = pow_int(base, to_integer(whole))?;
    if remain.is_zero() {
        return Ok(whole_pow);
    }

    let partial = pow_approx(base, remain, config.precision(), config.max_iterations())?;
    mul_fixed(whole_pow, partial)
}

/// Binomial-series approximation of `base^exponent`, meant for a
/// fractional `exponent` in `[0, BONE)`.
///
/// The series stops at the first term whose magnitude is below `precision`
/// (that term is still added) or as soon as a term rounds to exactly zero.
///
/// # Errors
///
/// - [`MathError::ConvergenceExceeded`] if `max_iterations` terms were
///   computed and the last one was still at least `precision`.
/// - [`MathError::ArithmeticOverflow`] / [`MathError::ArithmeticUnderflow`]
///   if a diverging series escapes the 256-bit range.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::ScaledInt;
/// use cmmm_math::math::{pow_approx, BPOW_PRECISION};
///
/// let base = ScaledInt::parse_units("1.1").expect("valid");
/// let half = ScaledInt::parse_units("0.5").expect("valid");
/// let root = pow_approx(base, half, BPOW_PRECISION, 500).expect("converges");
/// assert_eq!(root.format_units(), "1.048808848171005249");
/// ```
pub fn pow_approx(
    base: ScaledInt,
    exponent: ScaledInt,
    precision: ScaledInt,
    max_iterations: u32,
) -> Result<ScaledInt> {
    let a = exponent;
    let x = sub_sign(base, BONE);
    let mut term = BONE;
    let mut sum = term;
    let mut negative = false;
    let mut terms: u32 = 0;

    while term >= precision {
        if terms >= max_iterations {
            warn!(
                %base,
                %exponent,
                iterations = terms,
                "binomial series did not converge"
            );
            return Err(MathError::ConvergenceExceeded { iterations: terms });
        }
        let k = terms + 1;
        let big_k = ScaledInt::from_integer(u64::from(k));
        let c = sub_sign(a, ScaledInt::from_integer(u64::from(terms)));
        term = mul_fixed(term, mul_fixed(c.magnitude(), x.magnitude())?)?;
        term = div_fixed(term, big_k)?;
        terms = k;
        if term.is_zero() {
            break;
        }

        if x.is_negative() {
            negative = !negative;
        }
        if c.is_negative() {
            negative = !negative;
        }
        sum = if negative {
            sum.checked_sub(&term)
                .ok_or(MathError::ArithmeticUnderflow("binomial series sum"))?
        } else {
            sum.checked_add(&term)
                .ok_or(MathError::ArithmeticOverflow("binomial series sum"))?
        };
    }

    trace!(%base, %exponent, %sum, terms, "binomial series converged");
    Ok(sum)
}
