//! 18-decimal fixed-point value backed by a 256-bit unsigned integer.

use core::fmt;
use core::str::FromStr;

use primitive_types::U256;

use crate::error::{MathError, Result};

/// Raw value of `BONE` (`10^18`) as a single limb.
const BONE_RAW: u64 = 1_000_000_000_000_000_000;

/// Number of decimal places carried by the fixed-point representation.
pub const DECIMALS: usize = 18;

/// A real value multiplied by `BONE = 10^18` and stored as a `U256`.
///
/// This is the on-chain ("wei") representation used for token balances,
/// denormalized weights, and swap fees. `ScaledInt` never rescales on its
/// own: raw integer arithmetic is only exposed through checked helpers, and
/// fixed-point multiplication and division live in [`crate::math`].
///
/// # Examples
///
/// ```
/// use cmmm_math::domain::ScaledInt;
///
/// let one = ScaledInt::parse_units("1").expect("valid");
/// assert_eq!(one, ScaledInt::ONE);
/// assert_eq!(one.to_string(), "1000000000000000000");
/// assert_eq!(one.format_units(), "1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct ScaledInt(U256);

impl ScaledInt {
    /// Zero.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// The fixed-point unit `BONE`, representing `1.0`.
    pub const ONE: Self = Self(U256([BONE_RAW, 0, 0, 0]));

    /// Largest representable value.
    pub const MAX: Self = Self(U256::MAX);

    /// Wraps a raw, already-scaled `U256`.
    pub const fn new(raw: U256) -> Self {
        Self(raw)
    }

    /// Wraps a raw, already-scaled `u128` (wei units).
    pub fn from_raw(raw: u128) -> Self {
        Self(U256::from(raw))
    }

    /// Scales a whole number up to fixed point (`n * BONE`).
    ///
    /// Cannot overflow: `u64::MAX * 10^18` is far below `2^256`.
    pub fn from_integer(n: u64) -> Self {
        Self(U256::from(n) * U256::from(BONE_RAW))
    }

    /// Parses a raw wei decimal string such as `"990099009900990100"`.
    ///
    /// # Errors
    ///
    /// - [`MathError::Parse`] if the string is empty or contains anything
    ///   other than ASCII digits.
    /// - [`MathError::ArithmeticOverflow`] if the value exceeds 256 bits.
    pub fn from_dec_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::Parse("expected a non-empty string of decimal digits"));
        }
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| MathError::ArithmeticOverflow("decimal string exceeds 256 bits"))
    }

    /// Parses a human decimal such as `"1.5"` into its 18-decimal scaled
    /// form (`1_500_000_000_000_000_000`).
    ///
    /// # Errors
    ///
    /// - [`MathError::Parse`] on an empty string, a sign, a missing integer
    ///   or fractional part around `.`, non-digit characters, or more than
    ///   18 fractional digits.
    /// - [`MathError::ArithmeticOverflow`] if the scaled value exceeds 256 bits.
    pub fn parse_units(s: &str) -> Result<Self> {
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (s, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::Parse("integer part must be decimal digits"));
        }
        let whole = U256::from_dec_str(whole)
            .map_err(|_| MathError::ArithmeticOverflow("integer part exceeds 256 bits"))?;
        let mut scaled = whole
            .checked_mul(U256::from(BONE_RAW))
            .ok_or(MathError::ArithmeticOverflow("scaled value exceeds 256 bits"))?;

        if let Some(frac) = frac {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MathError::Parse("fractional part must be decimal digits"));
            }
            if frac.len() > DECIMALS {
                return Err(MathError::Parse("more than 18 fractional digits"));
            }
            // At most 18 digits, so both parse and scale fit in a u64 limb.
            let digits = U256::from_dec_str(frac)
                .map_err(|_| MathError::Parse("fractional part must be decimal digits"))?;
            let frac_scaled = digits * U256::exp10(DECIMALS - frac.len());
            scaled = scaled
                .checked_add(frac_scaled)
                .ok_or(MathError::ArithmeticOverflow("scaled value exceeds 256 bits"))?;
        }
        Ok(Self(scaled))
    }

    /// Formats the value as a human decimal, ether style: the fractional
    /// part drops trailing zeros but always keeps at least one digit.
    ///
    /// ```
    /// use cmmm_math::domain::ScaledInt;
    ///
    /// assert_eq!(ScaledInt::from_raw(1_500_000_000_000_000_000).format_units(), "1.5");
    /// assert_eq!(ScaledInt::from_raw(1).format_units(), "0.000000000000000001");
    /// ```
    #[must_use]
    pub fn format_units(&self) -> String {
        let (whole, frac) = self.0.div_mod(U256::from(BONE_RAW));
        let frac = format!("{:0width$}", frac.low_u64(), width = DECIMALS);
        let trimmed = frac.trim_end_matches('0');
        let frac = if trimmed.is_empty() { "0" } else { trimmed };
        format!("{whole}.{frac}")
    }

    /// Returns the underlying raw `U256`.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked raw addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked raw subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<U256> for ScaledInt {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl From<ScaledInt> for U256 {
    fn from(value: ScaledInt) -> Self {
        value.0
    }
}

/// Raw wei decimal form.
impl fmt::Display for ScaledInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScaledInt {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dec_str(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_dec_str(&raw).map_err(serde::de::Error::custom)
    }
}
