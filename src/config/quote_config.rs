//! Settings for pool-level quoting.

use super::PowConfig;
use crate::error::Result;

/// Configuration for [`WeightedPair`](crate::pools::WeightedPair) quotes.
///
/// With `enforce_trade_limits` set (the default), quotes that the pool
/// contract would reject are refused up front: deposits above half the
/// input balance and withdrawals above a third of the output balance.
/// The raw [`pricing`](crate::pricing) formulas never apply these limits.
///
/// # Examples
///
/// ```
/// use cmmm_math::config::{PowConfig, QuoteConfig};
///
/// let cfg = QuoteConfig::new(PowConfig::default(), false).expect("valid");
/// assert!(!cfg.enforce_trade_limits());
/// assert!(QuoteConfig::default().enforce_trade_limits());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "QuoteConfigFields")
)]
pub struct QuoteConfig {
    pow: PowConfig,
    enforce_trade_limits: bool,
}

impl QuoteConfig {
    /// Creates a validated `QuoteConfig`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PowConfig::validate`].
    pub fn new(pow: PowConfig, enforce_trade_limits: bool) -> Result<Self> {
        pow.validate()?;
        Ok(Self {
            pow,
            enforce_trade_limits,
        })
    }

    /// Exponentiation settings.
    #[must_use]
    pub const fn pow(&self) -> &PowConfig {
        &self.pow
    }

    /// Whether the pool's max in/out ratios are checked.
    #[must_use]
    pub const fn enforce_trade_limits(&self) -> bool {
        self.enforce_trade_limits
    }
}

/// Unvalidated wire form; deserialization goes through [`QuoteConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct QuoteConfigFields {
    pow: PowConfig,
    enforce_trade_limits: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<QuoteConfigFields> for QuoteConfig {
    type Error = crate::error::MathError;

    fn try_from(fields: QuoteConfigFields) -> Result<Self> {
        Self::new(fields.pow, fields.enforce_trade_limits)
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            pow: PowConfig::default(),
            enforce_trade_limits: true,
        }
    }
}
