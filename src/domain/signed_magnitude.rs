//! Sign-tracked difference of two unsigned fixed-point values.

use core::fmt;

use super::ScaledInt;

/// The result of subtracting two [`ScaledInt`] values without leaving the
/// unsigned domain: the absolute difference plus a sign flag.
///
/// Only the exponentiation kernel and the spot-price fee scale use this;
/// the magnitude keeps the same 256-bit width as every other value in the
/// pipeline.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::{ScaledInt, SignedMagnitude};
///
/// let d = SignedMagnitude::difference(ScaledInt::from_raw(3), ScaledInt::from_raw(5));
/// assert_eq!(d.magnitude(), ScaledInt::from_raw(2));
/// assert!(d.is_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedMagnitude {
    magnitude: ScaledInt,
    is_negative: bool,
}

impl SignedMagnitude {
    /// Computes `a - b` as `(|a - b|, a < b)`.
    ///
    /// Equal inputs give a non-negative zero.
    pub fn difference(a: ScaledInt, b: ScaledInt) -> Self {
        if a >= b {
            Self {
                magnitude: ScaledInt::new(a.get() - b.get()),
                is_negative: false,
            }
        } else {
            Self {
                magnitude: ScaledInt::new(b.get() - a.get()),
                is_negative: true,
            }
        }
    }

    /// Absolute value of the difference.
    pub const fn magnitude(&self) -> ScaledInt {
        self.magnitude
    }

    /// `true` when the first operand was smaller than the second.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.is_negative
    }
}

impl fmt::Display for SignedMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}
