//! Predicted outcome of a swap against a weighted pair.

use core::fmt;

use super::ScaledInt;
use crate::error::Result;
use crate::math::div_fixed;

/// The predicted outcome of a swap, as the on-chain pool would compute it.
///
/// Spot prices are the marginal price of the output token in units of the
/// input token, fee markup included, before and after the trade.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::{ScaledInt, SwapQuote};
///
/// let quote = SwapQuote::new(
///     ScaledInt::from_integer(2),
///     ScaledInt::ONE,
///     ScaledInt::ONE,
///     ScaledInt::from_integer(4),
/// );
/// assert_eq!(quote.effective_price(), Ok(ScaledInt::from_integer(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    amount_in: ScaledInt,
    amount_out: ScaledInt,
    spot_price_before: ScaledInt,
    spot_price_after: ScaledInt,
}

impl SwapQuote {
    /// Assembles a quote from its parts.
    pub const fn new(
        amount_in: ScaledInt,
        amount_out: ScaledInt,
        spot_price_before: ScaledInt,
        spot_price_after: ScaledInt,
    ) -> Self {
        Self {
            amount_in,
            amount_out,
            spot_price_before,
            spot_price_after,
        }
    }

    /// Amount of the input token paid into the pool.
    pub const fn amount_in(&self) -> ScaledInt {
        self.amount_in
    }

    /// Amount of the output token received from the pool.
    pub const fn amount_out(&self) -> ScaledInt {
        self.amount_out
    }

    /// Spot price at the balances before the trade.
    pub const fn spot_price_before(&self) -> ScaledInt {
        self.spot_price_before
    }

    /// Spot price at the balances after the trade.
    pub const fn spot_price_after(&self) -> ScaledInt {
        self.spot_price_after
    }

    /// Average price paid, `amount_in / amount_out`, in fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`](crate::error::MathError::DivisionByZero)
    /// if `amount_out` is zero.
    pub fn effective_price(&self) -> Result<ScaledInt> {
        div_fixed(self.amount_in, self.amount_out)
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, out={}, spot_before={}, spot_after={})",
            self.amount_in, self.amount_out, self.spot_price_before, self.spot_price_after
        )
    }
}
