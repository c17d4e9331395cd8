//! Swap pricing formulas for weighted pools.
//!
//! These are pure functions of the pool snapshot: balances, denormalized
//! weights, and the swap fee, all in 18-decimal fixed point. For a
//! validated, reusable snapshot see [`WeightedPair`](crate::pools::WeightedPair).

mod formulas;

#[cfg(test)]
mod proptest_properties;

pub use formulas::{
    in_given_out, in_given_out_with, out_given_in, out_given_in_with, spot_price,
};
