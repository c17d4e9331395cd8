//! Weighted constant-mean market maker pricing.
//!
//! For a pool holding `B_in`, `B_out` with weights `W_in`, `W_out` and swap
//! fee `f`:
//!
//! ```text
//! spot      = (B_in / W_in) / (B_out / W_out) · 1 / (1 - f)
//! out(A_in) = B_out · (1 - (B_in / (B_in + A_in·(1 - f)))^(W_in / W_out))
//! in(A_out) = B_in · ((B_out / (B_out - A_out))^(W_out / W_in) - 1) / (1 - f)
//! ```
//!
//! Every step uses the fixed-point primitives in the same order as the pool
//! contract, so results are bit-identical to what a swap would execute.

use tracing::trace;

use crate::config::PowConfig;
use crate::domain::ScaledInt;
use crate::error::{MathError, Result};
use crate::math::{div_fixed, mul_fixed, pow_with, sub_sign, BONE};

/// Marginal price of the output token in units of the input token,
/// including the fee markup.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if a weight or `balance_out` is zero, or
///   if `swap_fee == BONE`.
/// - [`MathError::ArithmeticOverflow`] if an intermediate exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::ScaledInt;
/// use cmmm_math::pricing::spot_price;
///
/// let b = ScaledInt::from_integer(100);
/// let w = ScaledInt::from_integer(1);
/// assert_eq!(spot_price(b, w, b, w, ScaledInt::ZERO), Ok(ScaledInt::ONE));
/// ```
pub fn spot_price(
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    swap_fee: ScaledInt,
) -> Result<ScaledInt> {
    let numer = div_fixed(balance_in, weight_in)?;
    let denom = div_fixed(balance_out, weight_out)?;
    let ratio = div_fixed(numer, denom)?;
    let scale = div_fixed(BONE, sub_sign(BONE, swap_fee).magnitude())?;
    let price = mul_fixed(ratio, scale)?;
    trace!(%balance_in, %weight_in, %balance_out, %weight_out, %swap_fee, %price, "spot price");
    Ok(price)
}

/// [`out_given_in_with`] using the default [`PowConfig`].
///
/// # Errors
///
/// See [`out_given_in_with`].
pub fn out_given_in(
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    amount_in: ScaledInt,
    swap_fee: ScaledInt,
) -> Result<ScaledInt> {
    out_given_in_with(
        &PowConfig::default(),
        balance_in,
        weight_in,
        balance_out,
        weight_out,
        amount_in,
        swap_fee,
    )
}

/// Amount of the output token released for depositing `amount_in` of the
/// input token.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if `weight_out` is zero, or if both
///   `balance_in` and the fee-adjusted input are zero.
/// - [`MathError::ArithmeticOverflow`] if an intermediate exceeds 256 bits.
/// - [`MathError::ConvergenceExceeded`] if the fractional power does not
///   converge (extreme trade sizes).
pub fn out_given_in_with(
    config: &PowConfig,
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    amount_in: ScaledInt,
    swap_fee: ScaledInt,
) -> Result<ScaledInt> {
    let weight_ratio = div_fixed(weight_in, weight_out)?;
    let adjusted_in = mul_fixed(amount_in, sub_sign(BONE, swap_fee).magnitude())?;
    let new_balance_in = balance_in
        .checked_add(&adjusted_in)
        .ok_or(MathError::ArithmeticOverflow("input balance after deposit"))?;
    let y = div_fixed(balance_in, new_balance_in)?;
    let foo = pow_with(y, weight_ratio, config)?;
    let bar = BONE
        .checked_sub(&foo)
        .ok_or(MathError::ArithmeticUnderflow("balance ratio power above one"))?;
    let amount_out = mul_fixed(balance_out, bar)?;
    trace!(%amount_in, %amount_out, %weight_ratio, "out given in");
    Ok(amount_out)
}

/// [`in_given_out_with`] using the default [`PowConfig`].
///
/// # Errors
///
/// See [`in_given_out_with`].
pub fn in_given_out(
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    amount_out: ScaledInt,
    swap_fee: ScaledInt,
) -> Result<ScaledInt> {
    in_given_out_with(
        &PowConfig::default(),
        balance_in,
        weight_in,
        balance_out,
        weight_out,
        amount_out,
        swap_fee,
    )
}

/// Amount of the input token required to withdraw exactly `amount_out` of
/// the output token. Inverse of [`out_given_in_with`].
///
/// # Errors
///
/// - [`MathError::InvalidAmount`] if `amount_out >= balance_out`.
/// - [`MathError::DivisionByZero`] if `weight_in` is zero or
///   `swap_fee == BONE`.
/// - [`MathError::ArithmeticUnderflow`] if `swap_fee > BONE`.
/// - [`MathError::ArithmeticOverflow`] if an intermediate exceeds 256 bits.
/// - [`MathError::ConvergenceExceeded`] if the fractional power does not
///   converge (extreme trade sizes).
pub fn in_given_out_with(
    config: &PowConfig,
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    amount_out: ScaledInt,
    swap_fee: ScaledInt,
) -> Result<ScaledInt> {
    if amount_out >= balance_out {
        return Err(MathError::InvalidAmount(
            "amount out must be less than the output balance",
        ));
    }
    let weight_ratio = div_fixed(weight_out, weight_in)?;
    // amount_out < balance_out checked above
    let remaining_out = ScaledInt::new(balance_out.get() - amount_out.get());
    let y = div_fixed(balance_out, remaining_out)?;
    let foo = pow_with(y, weight_ratio, config)?
        .checked_sub(&BONE)
        .ok_or(MathError::ArithmeticUnderflow("balance ratio power below one"))?;
    let fee_complement = BONE
        .checked_sub(&swap_fee)
        .ok_or(MathError::ArithmeticUnderflow("swap fee above one"))?;
    let amount_in = div_fixed(mul_fixed(balance_in, foo)?, fee_complement)?;
    trace!(%amount_out, %amount_in, %weight_ratio, "in given out");
    Ok(amount_in)
}
