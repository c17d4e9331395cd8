//! Pool models built on the pricing formulas.
//!
//! | Pool | Style |
//! |------|-------|
//! | [`WeightedPair`] | Balancer weighted pool, one directed pair |

mod weighted;

pub use weighted::WeightedPair;
