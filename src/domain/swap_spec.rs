//! Swap quote specification.

use core::fmt;

use super::ScaledInt;
use crate::error::{MathError, Result};

/// Descriptor for the type of swap constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapType {
    /// The input amount is fixed; output is computed.
    ExactIn = 0,
    /// The output amount is fixed; input is computed.
    ExactOut = 1,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// Specifies what constraint drives a quote: either an exact input amount
/// (priced with `out_given_in`) or an exact output amount (priced with
/// `in_given_out`).
///
/// # Invariants
///
/// The contained amount is always non-zero.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::{ScaledInt, SwapSpec};
///
/// assert!(SwapSpec::exact_in(ScaledInt::ONE).is_ok());
/// assert!(SwapSpec::exact_out(ScaledInt::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// The caller provides an exact input amount.
    ExactIn {
        /// The fixed input amount (always non-zero).
        amount_in: ScaledInt,
    },
    /// The caller requests an exact output amount.
    ExactOut {
        /// The desired output amount (always non-zero).
        amount_out: ScaledInt,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidAmount`] if `amount` is zero.
    pub fn exact_in(amount: ScaledInt) -> Result<Self> {
        if amount.is_zero() {
            return Err(MathError::InvalidAmount("swap amount must be non-zero"));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output specification.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidAmount`] if `amount` is zero.
    pub fn exact_out(amount: ScaledInt) -> Result<Self> {
        if amount.is_zero() {
            return Err(MathError::InvalidAmount("swap amount must be non-zero"));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Extracts the amount regardless of variant.
    pub const fn amount(&self) -> ScaledInt {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }

    /// Returns the [`SwapType`] descriptor for this specification.
    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        match self {
            Self::ExactIn { .. } => SwapType::ExactIn,
            Self::ExactOut { .. } => SwapType::ExactOut,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.swap_type(), self.amount())
    }
}
