//! Read-only quoting trait for pool snapshots.
//!
//! [`SwapQuoter`] is the seam between a pool model and its callers. It
//! offers two queries:
//!
//! 1. **Price**: [`SwapQuoter::spot_price`] returns the marginal price of
//!    the output token in units of the input token, fee included.
//! 2. **Quote**: [`SwapQuoter::quote`] prices an exact-in or exact-out
//!    trade without mutating the snapshot.
//!
//! # Fee Invariant
//!
//! Fees are charged on the input side only:
//!
//! ```text
//! net_input  = amount_in · (1 - fee)
//! amount_out = curve(net_input)
//! ```
//!
//! Quotes never commit state. Callers that want to chain trades build a
//! new snapshot from the quoted balances.

use crate::domain::{ScaledInt, SwapQuote, SwapSpec};
use crate::error::Result;

/// Anything that can price a swap from an immutable snapshot.
///
/// # Errors
///
/// Both methods propagate [`MathError`](crate::error::MathError) from the
/// fixed-point pipeline. Common variants:
///
/// - `DivisionByZero` when a weight or balance is zero
/// - `InvalidAmount` when an exact-out trade asks for the whole balance
/// - `TradeRatioExceeded` when a pool-level trade limit is hit
/// - `ConvergenceExceeded` for pathological exponent bases
pub trait SwapQuoter {
    /// Current marginal price, fee markup included.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn spot_price(&self) -> Result<ScaledInt>;

    /// Prices `spec` against the snapshot.
    ///
    /// For [`SwapSpec::ExactIn`] the returned `amount_in` echoes the request
    /// and `amount_out` is computed; for [`SwapSpec::ExactOut`] the reverse.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn quote(&self, spec: SwapSpec) -> Result<SwapQuote>;
}
