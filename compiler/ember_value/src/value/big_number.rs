//! Arbitrary-precision integers.

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// An integer with no fixed bit width.
///
/// Owns its magnitude. Addition never overflows; it allocates instead.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct BigNumber(BigInt);

impl BigNumber {
    /// Wrap an existing `BigInt`.
    #[inline]
    pub fn new(value: BigInt) -> Self {
        BigNumber(value)
    }

    /// Borrow the underlying `BigInt`.
    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Unwrap into the underlying `BigInt`.
    #[inline]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Unbounded addition.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "BigInt addition grows instead of overflowing"
    )]
    pub fn add(&self, rhs: &BigNumber) -> BigNumber {
        BigNumber(&self.0 + &rhs.0)
    }

    /// The value as `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Numeric comparison against a small integer without allocating.
    pub fn equals_i64(&self, other: i64) -> bool {
        self.to_i64() == Some(other)
    }
}

impl From<i64> for BigNumber {
    #[inline]
    fn from(value: i64) -> Self {
        BigNumber(BigInt::from(value))
    }
}

impl From<BigInt> for BigNumber {
    #[inline]
    fn from(value: BigInt) -> Self {
        BigNumber(value)
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}n", self.0)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
