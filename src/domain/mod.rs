//! Fundamental value types used throughout the pricing library.
//!
//! Every quantity crossing the crate boundary is a [`ScaledInt`]: a real
//! value scaled by `10^18` and held in a 256-bit unsigned integer, exactly
//! as the pool contracts store balances, weights, and fees.

mod scaled_int;
mod signed_magnitude;
mod swap_quote;
mod swap_spec;

pub use scaled_int::{ScaledInt, DECIMALS};
pub use signed_magnitude::SignedMagnitude;
pub use swap_quote::SwapQuote;
pub use swap_spec::{SwapSpec, SwapType};
