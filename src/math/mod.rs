//! Fixed-point arithmetic and exponentiation.
//!
//! Three layers, each built only on the one below it:
//!
//! | Layer | Items |
//! |-------|-------|
//! | Primitives | [`mul_fixed`], [`div_fixed`], [`floor_to_bone`], [`to_integer`], [`sub_sign`] |
//! | Exponentiation | [`pow_int`], [`pow`], [`pow_with`], [`pow_approx`] |
//! | Operators | [`CheckedArithmetic`] for [`ScaledInt`](crate::domain::ScaledInt) |
//!
//! Rounding is always half-up, matching the pool contracts.

mod checked;
mod constants;
mod fixed;
mod pow;

pub use checked::CheckedArithmetic;
pub use constants::{BONE, BPOW_APPROX_MAX_ITERATIONS, BPOW_PRECISION, MAX_IN_RATIO, MAX_OUT_RATIO};
pub use fixed::{div_fixed, floor_to_bone, mul_fixed, sub_sign, to_integer};
pub use pow::{pow, pow_approx, pow_int, pow_with};
