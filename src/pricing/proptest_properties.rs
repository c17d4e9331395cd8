//! Property-based tests using `proptest` for the pricing laws.
//!
//! 1. **Rounding law**: `mul_fixed(div_fixed(a, b), b)` is within one unit
//!    of `a` for divisors up to `BONE`.
//! 2. **Integer power**: identities at `0` and `1`, and agreement with
//!    repeated multiplication.
//! 3. **Exact exponents**: whole exponents never enter the series.
//! 4. **Spot monotonicity**: more input balance raises the price, more
//!    output balance lowers it.
//! 5. **Fee monotonicity**: a higher fee never yields more output.
//! 6. **Inverse consistency**: `in_given_out(out_given_in(x)) ≈ x`.

use primitive_types::U256;
use proptest::prelude::*;

use crate::domain::ScaledInt;
use crate::math::{div_fixed, mul_fixed, pow, pow_int, sub_sign, BONE};
use crate::pricing::{in_given_out, out_given_in, spot_price};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Raw values up to `10^30` (one trillion tokens).
fn raw_strategy() -> impl Strategy<Value = ScaledInt> {
    (0u128..=1_000_000_000_000_000_000_000_000_000_000).prop_map(ScaledInt::from_raw)
}

/// Raw divisors in `[1, BONE]`.
fn divisor_strategy() -> impl Strategy<Value = ScaledInt> {
    (1u128..=1_000_000_000_000_000_000).prop_map(ScaledInt::from_raw)
}

/// Bases in `[0.5, 1.5]`.
fn base_strategy() -> impl Strategy<Value = ScaledInt> {
    (500_000_000_000_000_000u128..=1_500_000_000_000_000_000).prop_map(ScaledInt::from_raw)
}

/// Whole-token balances.
fn balance_strategy() -> impl Strategy<Value = u64> {
    10u64..=1_000_000
}

/// Denormalized weights, as whole numbers.
fn weight_strategy() -> impl Strategy<Value = u64> {
    1u64..=10
}

/// Swap fees in `[0, 1%]`.
fn fee_strategy() -> impl Strategy<Value = ScaledInt> {
    (0u128..=10_000_000_000_000_000).prop_map(ScaledInt::from_raw)
}

fn int(v: u64) -> ScaledInt {
    ScaledInt::from_integer(v)
}

// ---------------------------------------------------------------------------
// 1-3. Fixed-point and exponentiation laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_rounding_law(a in raw_strategy(), b in divisor_strategy()) {
        let Ok(q) = div_fixed(a, b) else {
            return Err(TestCaseError::fail("div_fixed failed"));
        };
        let Ok(back) = mul_fixed(q, b) else {
            return Err(TestCaseError::fail("mul_fixed failed"));
        };
        let drift = sub_sign(back, a).magnitude();
        prop_assert!(
            drift <= ScaledInt::from_raw(1),
            "a={} b={} back={} drift={}", a, b, back, drift
        );
    }

    #[test]
    fn prop_pow_int_identities(base in raw_strategy()) {
        prop_assert_eq!(pow_int(base, U256::zero()), Ok(BONE));
        prop_assert_eq!(pow_int(base, U256::one()), Ok(base));
    }

    #[test]
    fn prop_pow_int_tracks_repeated_multiplication(
        base in base_strategy(),
        n in 0u64..=10,
    ) {
        let mut folded = BONE;
        for _ in 0..n {
            let Ok(next) = mul_fixed(folded, base) else {
                return Err(TestCaseError::fail("mul_fixed failed"));
            };
            folded = next;
        }
        let Ok(squared) = pow_int(base, U256::from(n)) else {
            return Err(TestCaseError::fail("pow_int failed"));
        };
        // Squaring and folding round at different steps.
        let drift = sub_sign(squared, folded).magnitude();
        prop_assert!(
            drift <= ScaledInt::from_raw(1_000),
            "base={} n={} squared={} folded={}", base, n, squared, folded
        );
    }

    #[test]
    fn prop_whole_exponent_skips_series(
        base in (0u128..=2_000_000_000_000_000_000).prop_map(ScaledInt::from_raw),
        k in 0u64..=8,
    ) {
        prop_assert_eq!(pow(base, int(k)), pow_int(base, U256::from(k)));
    }
}

// ---------------------------------------------------------------------------
// 4-6. Pricing laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_spot_price_monotonic_in_balance_in(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        delta in 1u64..=1_000,
        fee in fee_strategy(),
    ) {
        let (Ok(before), Ok(after)) = (
            spot_price(int(bi), int(wi), int(bo), int(wo), fee),
            spot_price(int(bi + delta), int(wi), int(bo), int(wo), fee),
        ) else {
            return Err(TestCaseError::fail("spot_price failed"));
        };
        prop_assert!(after > before, "before={} after={}", before, after);
    }

    #[test]
    fn prop_spot_price_monotonic_in_balance_out(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        delta in 1u64..=1_000,
        fee in fee_strategy(),
    ) {
        let (Ok(before), Ok(after)) = (
            spot_price(int(bi), int(wi), int(bo), int(wo), fee),
            spot_price(int(bi), int(wi), int(bo + delta), int(wo), fee),
        ) else {
            return Err(TestCaseError::fail("spot_price failed"));
        };
        prop_assert!(after < before, "before={} after={}", before, after);
    }

    #[test]
    fn prop_higher_fee_never_pays_more(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee_low in fee_strategy(),
        fee_extra in fee_strategy(),
    ) {
        let amount_in = int((bi / 100).max(1));
        let Some(fee_high) = fee_low.checked_add(&fee_extra) else {
            return Ok(());
        };
        let (Ok(out_low), Ok(out_high)) = (
            out_given_in(int(bi), int(wi), int(bo), int(wo), amount_in, fee_low),
            out_given_in(int(bi), int(wi), int(bo), int(wo), amount_in, fee_high),
        ) else {
            return Err(TestCaseError::fail("out_given_in failed"));
        };
        prop_assert!(out_high <= out_low, "low={} high={}", out_low, out_high);
    }

    #[test]
    fn prop_in_given_out_inverts_out_given_in(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee in fee_strategy(),
        share in 1u128..=10_000,
    ) {
        // Up to 1% of the input balance keeps both series near 1.
        let balance_in = int(bi);
        let amount_in = ScaledInt::from_raw(u128::from(bi) * 1_000_000_000_000 * share);
        let Ok(amount_out) =
            out_given_in(balance_in, int(wi), int(bo), int(wo), amount_in, fee)
        else {
            return Err(TestCaseError::fail("out_given_in failed"));
        };
        if amount_out.is_zero() {
            return Ok(());
        }
        let Ok(back) = in_given_out(balance_in, int(wi), int(bo), int(wo), amount_out, fee) else {
            return Err(TestCaseError::fail("in_given_out failed"));
        };
        // Series truncation bounds the drift relative to the pool size.
        let tolerance = ScaledInt::new(balance_in.get() / U256::exp10(9));
        let drift = sub_sign(back, amount_in).magnitude();
        prop_assert!(
            drift <= tolerance,
            "in={} out={} back={} drift={}", amount_in, amount_out, back, drift
        );
    }
}
