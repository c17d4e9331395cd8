//! Tuning for the fractional exponentiation kernel.

use crate::domain::ScaledInt;
use crate::error::{MathError, Result};
use crate::math::{BPOW_APPROX_MAX_ITERATIONS, BPOW_PRECISION};

/// Precision threshold and term cap for the binomial series used by
/// [`pow_with`](crate::math::pow_with).
///
/// The default reproduces the pool contracts: terms stop once they fall
/// below [`BPOW_PRECISION`]. The iteration cap has no on-chain
/// counterpart; it only bounds the work done for pathological bases.
///
/// # Validation
///
/// - `precision` must be non-zero, otherwise only an exactly-zero term
///   could end the series.
/// - `max_iterations` must be non-zero.
///
/// # Examples
///
/// ```
/// use cmmm_math::config::PowConfig;
/// use cmmm_math::math::BPOW_PRECISION;
///
/// let cfg = PowConfig::default();
/// assert_eq!(cfg.precision(), BPOW_PRECISION);
/// assert!(PowConfig::new(BPOW_PRECISION, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PowConfigFields")
)]
pub struct PowConfig {
    precision: ScaledInt,
    max_iterations: u32,
}

impl PowConfig {
    /// Creates a validated `PowConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidConfiguration`] if `precision` or
    /// `max_iterations` is zero.
    pub fn new(precision: ScaledInt, max_iterations: u32) -> Result<Self> {
        let config = Self {
            precision,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidConfiguration`] if `precision` or
    /// `max_iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.precision.is_zero() {
            return Err(MathError::InvalidConfiguration(
                "series precision must be greater than zero",
            ));
        }
        if self.max_iterations == 0 {
            return Err(MathError::InvalidConfiguration(
                "series iteration cap must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Minimum term magnitude that keeps the series going.
    pub const fn precision(&self) -> ScaledInt {
        self.precision
    }

    /// Maximum number of series terms computed before giving up.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// Unvalidated wire form; deserialization goes through [`PowConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PowConfigFields {
    precision: ScaledInt,
    max_iterations: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<PowConfigFields> for PowConfig {
    type Error = MathError;

    fn try_from(fields: PowConfigFields) -> Result<Self> {
        Self::new(fields.precision, fields.max_iterations)
    }
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            precision: BPOW_PRECISION,
            max_iterations: BPOW_APPROX_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_contract_precision() {
        let cfg = PowConfig::default();
        assert_eq!(cfg.precision(), BPOW_PRECISION);
        assert_eq!(cfg.max_iterations(), BPOW_APPROX_MAX_ITERATIONS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn custom_values() {
        let Ok(cfg) = PowConfig::new(ScaledInt::from_raw(1_000), 64) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.precision(), ScaledInt::from_raw(1_000));
        assert_eq!(cfg.max_iterations(), 64);
    }

    #[test]
    fn zero_precision_rejected() {
        let Err(MathError::InvalidConfiguration(_)) = PowConfig::new(ScaledInt::ZERO, 10) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn zero_iterations_rejected() {
        let Err(MathError::InvalidConfiguration(_)) = PowConfig::new(BPOW_PRECISION, 0) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let cfg = PowConfig::default();
        let Ok(json) = serde_json::to_string(&cfg) else {
            panic!("serialize");
        };
        assert_eq!(json, r#"{"precision":"100000000","max_iterations":500}"#);
        let Ok(back) = serde_json::from_str::<PowConfig>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, cfg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_zero_fields() {
        for json in [
            r#"{"precision":"0","max_iterations":500}"#,
            r#"{"precision":"100000000","max_iterations":0}"#,
            r#"{"precision":"0","max_iterations":0}"#,
        ] {
            let Err(err) = serde_json::from_str::<PowConfig>(json) else {
                panic!("expected rejection of {json}");
            };
            assert!(err.to_string().contains("invalid configuration"), "{err}");
        }
    }
}
