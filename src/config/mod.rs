//! Declarative inputs for pricing.
//!
//! - [`WeightedPairState`]: validated pool snapshot for one swap direction.
//! - [`PowConfig`]: precision and term cap of the exponentiation series.
//! - [`QuoteConfig`]: [`PowConfig`] plus the pool trade-limit switch.

mod pair_state;
mod pow_config;
mod quote_config;

pub use pair_state::WeightedPairState;
pub use pow_config::PowConfig;
pub use quote_config::QuoteConfig;
