//! Protocol constants shared with the on-chain pool implementation.

use primitive_types::U256;

use crate::domain::ScaledInt;

/// The fixed-point unit, `10^18`, representing `1.0`.
pub const BONE: ScaledInt = ScaledInt::ONE;

/// Series terms below this magnitude (`BONE / 10^10 = 10^8`) stop the
/// binomial expansion in [`pow_approx`](super::pow_approx).
pub const BPOW_PRECISION: ScaledInt = ScaledInt::new(U256([100_000_000, 0, 0, 0]));

/// Default cap on the number of binomial series terms.
///
/// Bases inside `[0.25, 1.75]` converge in under 60 terms; anything needing
/// more than this is rejected with
/// [`MathError::ConvergenceExceeded`](crate::error::MathError::ConvergenceExceeded).
pub const BPOW_APPROX_MAX_ITERATIONS: u32 = 500;

/// A single swap may add at most half of the input balance (`BONE / 2`).
pub const MAX_IN_RATIO: ScaledInt = ScaledInt::new(U256([500_000_000_000_000_000, 0, 0, 0]));

/// A single swap may remove at most a third of the output balance
/// (`BONE / 3 + 1`).
pub const MAX_OUT_RATIO: ScaledInt = ScaledInt::new(U256([333_333_333_333_333_334, 0, 0, 0]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bpow_precision_is_bone_over_1e10() {
        assert_eq!(BPOW_PRECISION.get(), BONE.get() / U256::exp10(10));
    }

    #[test]
    fn ratio_limits_match_pool_contract() {
        assert_eq!(MAX_IN_RATIO.get(), BONE.get() / U256::from(2u8));
        assert_eq!(MAX_OUT_RATIO.get(), BONE.get() / U256::from(3u8) + U256::one());
    }
}
