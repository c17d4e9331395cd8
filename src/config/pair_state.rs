//! Snapshot of one token pair inside a weighted pool.

use crate::domain::ScaledInt;
use crate::error::{MathError, Result};
use crate::math::BONE;

/// The five numbers a pool-state provider reads from the pool contract for
/// one swap direction: both balances, both denormalized weights, and the
/// swap fee, all in 18-decimal fixed point.
///
/// The snapshot is a plain value; the crate never caches or refreshes it.
///
/// # Validation
///
/// - Both balances must be non-zero.
/// - Both weights must be non-zero.
/// - The swap fee must be below `BONE` (100%).
///
/// # Examples
///
/// ```
/// use cmmm_math::config::WeightedPairState;
/// use cmmm_math::domain::ScaledInt;
///
/// let state = WeightedPairState::new(
///     ScaledInt::from_integer(100),
///     ScaledInt::from_integer(8),
///     ScaledInt::from_integer(400),
///     ScaledInt::from_integer(2),
///     ScaledInt::parse_units("0.003").expect("valid"),
/// );
/// assert!(state.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "WeightedPairStateFields")
)]
pub struct WeightedPairState {
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    swap_fee: ScaledInt,
}

impl WeightedPairState {
    /// Creates a validated snapshot.
    ///
    /// # Errors
    ///
    /// - [`MathError::ZeroBalance`] if either balance is zero.
    /// - [`MathError::InvalidWeight`] if either weight is zero.
    /// - [`MathError::InvalidFee`] if `swap_fee >= BONE`.
    pub fn new(
        balance_in: ScaledInt,
        weight_in: ScaledInt,
        balance_out: ScaledInt,
        weight_out: ScaledInt,
        swap_fee: ScaledInt,
    ) -> Result<Self> {
        let state = Self {
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            swap_fee,
        };
        state.validate()?;
        Ok(state)
    }

    /// Validates all snapshot invariants.
    ///
    /// # Errors
    ///
    /// - [`MathError::ZeroBalance`] if either balance is zero.
    /// - [`MathError::InvalidWeight`] if either weight is zero.
    /// - [`MathError::InvalidFee`] if `swap_fee >= BONE`.
    pub fn validate(&self) -> Result<()> {
        if self.balance_in.is_zero() || self.balance_out.is_zero() {
            return Err(MathError::ZeroBalance);
        }
        if self.weight_in.is_zero() || self.weight_out.is_zero() {
            return Err(MathError::InvalidWeight("token weights must be greater than zero"));
        }
        if self.swap_fee >= BONE {
            return Err(MathError::InvalidFee("swap fee must be below 100%"));
        }
        Ok(())
    }

    /// The same pair seen from the opposite swap direction.
    pub const fn reversed(&self) -> Self {
        Self {
            balance_in: self.balance_out,
            weight_in: self.weight_out,
            balance_out: self.balance_in,
            weight_out: self.weight_in,
            swap_fee: self.swap_fee,
        }
    }

    /// Balance of the token being sold into the pool.
    pub const fn balance_in(&self) -> ScaledInt {
        self.balance_in
    }

    /// Denormalized weight of the token being sold.
    pub const fn weight_in(&self) -> ScaledInt {
        self.weight_in
    }

    /// Balance of the token being bought from the pool.
    pub const fn balance_out(&self) -> ScaledInt {
        self.balance_out
    }

    /// Denormalized weight of the token being bought.
    pub const fn weight_out(&self) -> ScaledInt {
        self.weight_out
    }

    /// Swap fee as a fixed-point fraction.
    pub const fn swap_fee(&self) -> ScaledInt {
        self.swap_fee
    }
}

/// Unvalidated wire form; deserialization goes through
/// [`WeightedPairState::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WeightedPairStateFields {
    balance_in: ScaledInt,
    weight_in: ScaledInt,
    balance_out: ScaledInt,
    weight_out: ScaledInt,
    swap_fee: ScaledInt,
}

#[cfg(feature = "serde")]
impl TryFrom<WeightedPairStateFields> for WeightedPairState {
    type Error = MathError;

    fn try_from(f: WeightedPairStateFields) -> Result<Self> {
        Self::new(f.balance_in, f.weight_in, f.balance_out, f.weight_out, f.swap_fee)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn int(v: u64) -> ScaledInt {
        ScaledInt::from_integer(v)
    }

    fn fee() -> ScaledInt {
        ScaledInt::from_raw(3_000_000_000_000_000)
    }

    fn valid_state() -> WeightedPairState {
        let Ok(state) = WeightedPairState::new(int(100), int(8), int(400), int(2), fee()) else {
            panic!("expected Ok");
        };
        state
    }

    #[test]
    fn accessors() {
        let s = valid_state();
        assert_eq!(s.balance_in(), int(100));
        assert_eq!(s.weight_in(), int(8));
        assert_eq!(s.balance_out(), int(400));
        assert_eq!(s.weight_out(), int(2));
        assert_eq!(s.swap_fee(), fee());
    }

    #[test]
    fn zero_fee_allowed() {
        assert!(WeightedPairState::new(int(1), int(1), int(1), int(1), ScaledInt::ZERO).is_ok());
    }

    #[test]
    fn zero_balance_rejected() {
        let Err(MathError::ZeroBalance) =
            WeightedPairState::new(ScaledInt::ZERO, int(1), int(1), int(1), fee())
        else {
            panic!("expected ZeroBalance");
        };
        let Err(MathError::ZeroBalance) =
            WeightedPairState::new(int(1), int(1), ScaledInt::ZERO, int(1), fee())
        else {
            panic!("expected ZeroBalance");
        };
    }

    #[test]
    fn zero_weight_rejected() {
        let Err(MathError::InvalidWeight(_)) =
            WeightedPairState::new(int(1), int(1), int(1), ScaledInt::ZERO, fee())
        else {
            panic!("expected InvalidWeight");
        };
    }

    #[test]
    fn full_fee_rejected() {
        let Err(MathError::InvalidFee(_)) =
            WeightedPairState::new(int(1), int(1), int(1), int(1), BONE)
        else {
            panic!("expected InvalidFee");
        };
    }

    #[test]
    fn reversed_swaps_sides() {
        let r = valid_state().reversed();
        assert_eq!(r.balance_in(), int(400));
        assert_eq!(r.weight_in(), int(2));
        assert_eq!(r.balance_out(), int(100));
        assert_eq!(r.weight_out(), int(8));
        assert_eq!(r.swap_fee(), fee());
        assert_eq!(r.reversed(), valid_state());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let s = valid_state();
        let Ok(json) = serde_json::to_string(&s) else {
            panic!("serialize");
        };
        assert!(json.contains("\"balance_in\":\"100000000000000000000\""));
        let Ok(back) = serde_json::from_str::<WeightedPairState>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, s);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_invalid_snapshots() {
        let cases = [
            (
                r#"{"balance_in":"0","weight_in":"1","balance_out":"1","weight_out":"1","swap_fee":"0"}"#,
                "pool balance must be non-zero",
            ),
            (
                r#"{"balance_in":"1","weight_in":"0","balance_out":"1","weight_out":"1","swap_fee":"0"}"#,
                "invalid weight",
            ),
            (
                r#"{"balance_in":"1","weight_in":"1","balance_out":"1","weight_out":"1","swap_fee":"2000000000000000000"}"#,
                "invalid fee",
            ),
        ];
        for (json, message) in cases {
            let Err(err) = serde_json::from_str::<WeightedPairState>(json) else {
                panic!("expected rejection of {json}");
            };
            assert!(err.to_string().contains(message), "{err}");
        }
    }
}
