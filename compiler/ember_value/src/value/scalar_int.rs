//! Integer newtype that prevents unchecked arithmetic.
//!
//! `ScalarInt` wraps `i64` and intentionally does NOT implement `Add`.
//! Addition goes through `checked_add`, which returns `None` on overflow,
//! so the evaluator cannot forget to handle the widening case.

use std::fmt;

/// A 64-bit signed integer without operator overloads.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ScalarInt(i64);

impl ScalarInt {
    /// The minimum value (`i64::MIN`).
    pub const MIN: Self = Self(i64::MIN);

    /// The maximum value (`i64::MAX`).
    pub const MAX: Self = Self(i64::MAX);

    /// Create a new `ScalarInt` from a raw `i64`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<i64> for ScalarInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests;
