//! The `SafeInteger` refined type.
//!
//! A safe integer is exactly representable in an IEEE-754 double: an integer
//! with magnitude at most `2^53 - 1`. The type is a thin wrapper over `i64`
//! whose every constructor validates, so a held value always satisfies the
//! invariant. The `i64` backing erases the double's negative zero (`-0.0`
//! validates and converts to `0`); nothing else differs from the source
//! representation.

use std::fmt;

use thiserror::Error;

/// Why a value could not be converted to a [`SafeInteger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SafeIntegerError {
    /// The value is NaN or infinite.
    #[error("value is not finite")]
    NotFinite,
    /// The value has a fractional component.
    #[error("value has a fractional component")]
    NotAnInteger,
    /// The magnitude exceeds `2^53 - 1`.
    #[error("value is outside the safe integer range")]
    OutOfRange,
}

/// An integer exactly representable in an IEEE-754 double.
///
/// Invariant: `-(2^53 - 1) <= value <= 2^53 - 1`. Constructed only through
/// the validated paths (`new`, `from_f64`, the `TryFrom` impls, or the
/// conversion operations in [`crate::convert`] and [`crate::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SafeInteger(i64);

impl SafeInteger {
    /// Largest safe integer, `2^53 - 1`.
    pub const MAX: SafeInteger = SafeInteger(9_007_199_254_740_991);

    /// Smallest safe integer, `-(2^53 - 1)`.
    pub const MIN: SafeInteger = SafeInteger(-9_007_199_254_740_991);

    /// Creates a safe integer, or `None` if the magnitude exceeds `2^53 - 1`.
    #[must_use]
    pub const fn new(value: i64) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(SafeInteger(value))
        } else {
            None
        }
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Validates a double as a safe integer: finite, integral, in range.
    ///
    /// This is the primitive behind [`crate::is_safe_integer`] and
    /// [`crate::as_safe_integer`].
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value.abs() > Self::MAX.0 as f64 {
            return None;
        }
        Some(SafeInteger(value as i64))
    }

    /// Returns the value as a double. Exact by the invariant.
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for SafeInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for SafeInteger {
    type Error = SafeIntegerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        SafeInteger::new(value).ok_or(SafeIntegerError::OutOfRange)
    }
}

impl TryFrom<u64> for SafeInteger {
    type Error = SafeIntegerError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 as u64 {
            return Err(SafeIntegerError::OutOfRange);
        }
        Ok(SafeInteger(value as i64))
    }
}

impl TryFrom<f64> for SafeInteger {
    type Error = SafeIntegerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(SafeIntegerError::NotFinite);
        }
        if value.fract() != 0.0 {
            return Err(SafeIntegerError::NotAnInteger);
        }
        if value.abs() > Self::MAX.0 as f64 {
            return Err(SafeIntegerError::OutOfRange);
        }
        Ok(SafeInteger(value as i64))
    }
}

// Every integer of at most 32 bits is well inside the 53-bit safe range.
macro_rules! impl_from_small_int {
    ($($int:ty),*) => {$(
        impl From<$int> for SafeInteger {
            fn from(value: $int) -> Self {
                SafeInteger(i64::from(value))
            }
        }
    )*};
}

impl_from_small_int!(i8, u8, i16, u16, i32, u32);

impl From<SafeInteger> for i64 {
    fn from(value: SafeInteger) -> Self {
        value.0
    }
}

impl From<SafeInteger> for f64 {
    fn from(value: SafeInteger) -> Self {
        value.to_f64()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::{Deserialize, Deserializer, Error as _};
    use serde::ser::{Serialize, Serializer};

    use super::SafeInteger;

    impl Serialize for SafeInteger {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_i64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for SafeInteger {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = i64::deserialize(deserializer)?;
            SafeInteger::new(raw).ok_or_else(|| {
                D::Error::custom(format_args!("integer {raw} is outside the safe range"))
            })
        }
    }
}
