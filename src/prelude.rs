//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cmmm_math::prelude::*;
//!
//! assert_eq!(mul_fixed(BONE, BONE), Ok(BONE));
//! ```

pub use crate::domain::{ScaledInt, SignedMagnitude, SwapQuote, SwapSpec, SwapType};

pub use crate::traits::SwapQuoter;

pub use crate::math::{
    div_fixed, floor_to_bone, mul_fixed, pow, pow_approx, pow_int, sub_sign, to_integer,
    CheckedArithmetic, BONE, BPOW_PRECISION,
};

pub use crate::pricing::{in_given_out, out_given_in, spot_price};

pub use crate::config::{PowConfig, QuoteConfig, WeightedPairState};

pub use crate::error::{MathError, Result};

pub use crate::pools::WeightedPair;
