//! # CMMM Math
//!
//! Bit-exact pricing for weighted constant-mean market makers (Balancer
//! style pools).
//!
//! Every quantity is an unsigned 256-bit integer scaled by `BONE = 10^18`.
//! The crate reproduces the pool contract's fixed-point pipeline step for
//! step, including half-up rounding and the truncated binomial series used
//! for fractional powers, so an off-chain quote matches the amount a swap
//! would actually execute to the last wei.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for values, configs, and quotes |
//!
//! # Quick Start
//!
//! ## Price a trade with the raw formulas
//!
//! ```rust
//! use cmmm_math::domain::ScaledInt;
//! use cmmm_math::pricing::{in_given_out, out_given_in};
//!
//! let balance = ScaledInt::from_integer(100);
//! let weight = ScaledInt::from_integer(1);
//! let amount_in = ScaledInt::ONE;
//!
//! let out = out_given_in(balance, weight, balance, weight, amount_in, ScaledInt::ZERO)
//!     .expect("priced");
//! assert_eq!(out.format_units(), "0.9900990099009901");
//!
//! let back = in_given_out(balance, weight, balance, weight, out, ScaledInt::ZERO)
//!     .expect("priced");
//! assert_eq!(back, amount_in);
//! ```
//!
//! ## Quote against a pool snapshot
//!
//! ```rust
//! use cmmm_math::config::{QuoteConfig, WeightedPairState};
//! use cmmm_math::domain::{ScaledInt, SwapSpec};
//! use cmmm_math::pools::WeightedPair;
//! use cmmm_math::traits::SwapQuoter;
//!
//! let state = WeightedPairState::new(
//!     ScaledInt::from_integer(100),
//!     ScaledInt::from_integer(8),
//!     ScaledInt::from_integer(400),
//!     ScaledInt::from_integer(2),
//!     ScaledInt::parse_units("0.003").expect("valid fee"),
//! )
//! .expect("valid state");
//! let pair = WeightedPair::new(state, QuoteConfig::default()).expect("valid pair");
//!
//! let spec = SwapSpec::exact_in(ScaledInt::ONE).expect("non-zero");
//! let quote = pair.quote(spec).expect("quoted");
//! assert!(quote.spot_price_after() > quote.spot_price_before());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    Pools     │  WeightedPair: snapshot + trade limits + SwapQuoter
//! └──────┬──────┘
//!        │ spot / exact-in / exact-out
//!        ▼
//! ┌─────────────┐
//! │   Pricing    │  spot_price, out_given_in, in_given_out
//! └──────┬──────┘
//!        │ pow_with
//!        ▼
//! ┌─────────────┐
//! │    Math      │  pow_int, pow_approx, mul_fixed, div_fixed, sub_sign
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  ScaledInt, SignedMagnitude, SwapSpec, SwapQuote
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`ScaledInt`](domain::ScaledInt), [`SignedMagnitude`](domain::SignedMagnitude), [`SwapSpec`](domain::SwapSpec), [`SwapQuote`](domain::SwapQuote) |
//! | [`math`]   | Fixed-point primitives, exponentiation, protocol constants |
//! | [`pricing`] | Weighted-pool pricing formulas |
//! | [`config`] | [`PowConfig`](config::PowConfig), [`QuoteConfig`](config::QuoteConfig), [`WeightedPairState`](config::WeightedPairState) |
//! | [`traits`] | [`SwapQuoter`](traits::SwapQuoter) |
//! | [`pools`]  | [`WeightedPair`](pools::WeightedPair) |
//! | [`error`]  | [`MathError`](error::MathError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Formula evaluations log at `TRACE`, pool quotes at `DEBUG`, and a series
//! hitting its iteration cap at `WARN`.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod traits;
