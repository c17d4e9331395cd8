//! Unified error types for the pricing library.
//!
//! All fallible operations across the crate return [`MathError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! No operation ever reports failure through a sentinel value such as zero.

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, MathError>;

/// Every failure the fixed-point core, the exponentiation kernel, or the
/// pricing layer can report.
///
/// Errors are local and synchronous: they are returned to the immediate
/// caller unchanged and nothing inside the crate retries.
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::ScaledInt;
/// use cmmm_math::error::MathError;
/// use cmmm_math::math::div_fixed;
///
/// let err = div_fixed(ScaledInt::ONE, ScaledInt::ZERO);
/// assert_eq!(err, Err(MathError::DivisionByZero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MathError {
    /// A fixed-point division had a zero divisor (e.g. a zero pool weight).
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// An unsigned subtraction would have gone negative.
    #[error("arithmetic underflow: {0}")]
    ArithmeticUnderflow(&'static str),

    /// A trade amount is economically meaningless, such as requesting at
    /// least the whole output balance of the pool.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The binomial series did not drop below the precision threshold
    /// within the configured number of terms.
    #[error("binomial series did not converge within {iterations} iterations")]
    ConvergenceExceeded {
        /// Number of series terms computed before giving up.
        iterations: u32,
    },

    /// The swap fee is outside `[0, BONE)`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A token weight is unusable (zero).
    #[error("invalid weight: {0}")]
    InvalidWeight(&'static str),

    /// A pool balance is zero.
    #[error("pool balance must be non-zero")]
    ZeroBalance,

    /// A trade exceeds the pool's maximum in/out ratio.
    #[error("trade ratio exceeded: {0}")]
    TradeRatioExceeded(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A decimal string could not be parsed into a fixed-point value.
    #[error("parse error: {0}")]
    Parse(&'static str),
}
