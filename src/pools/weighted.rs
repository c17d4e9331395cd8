//! Weighted pair quoting (Balancer style).
//!
//! A [`WeightedPair`] wraps one [`WeightedPairState`] snapshot and prices
//! trades against it with the [`pricing`](crate::pricing) formulas. On top of
//! the raw formulas it reports spot prices on both sides of the trade and,
//! when enabled, the per-swap ratio limits enforced by the pool contract:
//!
//! ```text
//! amount_in  <= balance_in  · MAX_IN_RATIO    (1/2)
//! amount_out <= balance_out · MAX_OUT_RATIO   (1/3 + 1 wei)
//! ```

use tracing::debug;

use crate::config::{QuoteConfig, WeightedPairState};
use crate::domain::{ScaledInt, SwapQuote, SwapSpec};
use crate::error::{MathError, Result};
use crate::math::{mul_fixed, MAX_IN_RATIO, MAX_OUT_RATIO};
use crate::pricing::{in_given_out_with, out_given_in_with, spot_price};
use crate::traits::SwapQuoter;

/// A weighted pool viewed as a single directed token pair.
///
/// The pair is immutable: quoting never updates balances. Use
/// [`WeightedPair::reversed`] to price the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPair {
    state: WeightedPairState,
    config: QuoteConfig,
}

impl WeightedPair {
    /// Creates a pair from a snapshot and quoting settings.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`WeightedPairState::validate`] or
    /// [`PowConfig::validate`](crate::config::PowConfig::validate).
    pub fn new(state: WeightedPairState, config: QuoteConfig) -> Result<Self> {
        state.validate()?;
        config.pow().validate()?;
        Ok(Self { state, config })
    }

    /// Returns the pool snapshot.
    #[must_use]
    pub const fn state(&self) -> &WeightedPairState {
        &self.state
    }

    /// Returns the quoting settings.
    #[must_use]
    pub const fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// The same pool quoted in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            state: self.state.reversed(),
            config: self.config,
        }
    }

    /// Largest input the pool accepts in one swap.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] for balances near `U256::MAX`.
    pub fn max_amount_in(&self) -> Result<ScaledInt> {
        mul_fixed(self.state.balance_in(), MAX_IN_RATIO)
    }

    /// Largest output the pool releases in one swap.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] for balances near `U256::MAX`.
    pub fn max_amount_out(&self) -> Result<ScaledInt> {
        mul_fixed(self.state.balance_out(), MAX_OUT_RATIO)
    }

    fn compute_exact_in(&self, amount_in: ScaledInt) -> Result<ScaledInt> {
        if self.config.enforce_trade_limits() && amount_in > self.max_amount_in()? {
            return Err(MathError::TradeRatioExceeded(
                "amount in exceeds half of the input balance",
            ));
        }
        let s = &self.state;
        out_given_in_with(
            self.config.pow(),
            s.balance_in(),
            s.weight_in(),
            s.balance_out(),
            s.weight_out(),
            amount_in,
            s.swap_fee(),
        )
    }

    fn compute_exact_out(&self, amount_out: ScaledInt) -> Result<ScaledInt> {
        if self.config.enforce_trade_limits() && amount_out > self.max_amount_out()? {
            return Err(MathError::TradeRatioExceeded(
                "amount out exceeds a third of the output balance",
            ));
        }
        let s = &self.state;
        in_given_out_with(
            self.config.pow(),
            s.balance_in(),
            s.weight_in(),
            s.balance_out(),
            s.weight_out(),
            amount_out,
            s.swap_fee(),
        )
    }

    /// Spot price once `amount_in` has been added and `amount_out` removed.
    fn spot_price_after(&self, amount_in: ScaledInt, amount_out: ScaledInt) -> Result<ScaledInt> {
        let s = &self.state;
        let balance_in = s
            .balance_in()
            .checked_add(&amount_in)
            .ok_or(MathError::ArithmeticOverflow("input balance after swap"))?;
        let balance_out = s
            .balance_out()
            .checked_sub(&amount_out)
            .ok_or(MathError::ArithmeticUnderflow("output balance after swap"))?;
        spot_price(
            balance_in,
            s.weight_in(),
            balance_out,
            s.weight_out(),
            s.swap_fee(),
        )
    }
}

impl SwapQuoter for WeightedPair {
    fn spot_price(&self) -> Result<ScaledInt> {
        let s = &self.state;
        spot_price(
            s.balance_in(),
            s.weight_in(),
            s.balance_out(),
            s.weight_out(),
            s.swap_fee(),
        )
    }

    fn quote(&self, spec: SwapSpec) -> Result<SwapQuote> {
        let spot_before = self.spot_price()?;
        let (amount_in, amount_out) = match spec {
            SwapSpec::ExactIn { amount_in } => (amount_in, self.compute_exact_in(amount_in)?),
            SwapSpec::ExactOut { amount_out } => (self.compute_exact_out(amount_out)?, amount_out),
        };
        let spot_after = self.spot_price_after(amount_in, amount_out)?;
        debug!(%spec, %amount_in, %amount_out, %spot_before, %spot_after, "weighted quote");
        Ok(SwapQuote::new(amount_in, amount_out, spot_before, spot_after))
    }
}
