//! Big Number Value Type
//!
//! Provides the arbitrary precision signed integer shared by the buffer codecs.
//!
//! This module uses the `malachite` crate for arithmetic. Only the operations
//! the codecs and the modular exponentiation need are exposed here; the rest of
//! `malachite` stays reachable through [`BigNumber::as_integer`].

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{Abs, UnsignedAbs};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};

/// Width of one digit in the magnitude encodings, in bits.
const BYTE_BITS: u64 = 8;

/// Error returned when a string is not a valid decimal integer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid big number literal: {0:?}")]
pub struct ParseBigNumberError(pub String);

/// Big number representation using malachite's Integer
///
/// Values are signed and unbounded. Byte conversions only ever look at the
/// magnitude; the sign is dropped on export and never produced on import.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        Self {
            value: (&self.value).abs(),
        }
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Unsigned magnitude |x| as a natural number
    pub fn magnitude(&self) -> Natural {
        (&self.value).unsigned_abs()
    }

    /// Build a non-negative number from magnitude bytes, least significant first.
    ///
    /// Trailing zero bytes are allowed and do not change the value. An empty
    /// slice is zero.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        Self::from_natural(<Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(
            BYTE_BITS,
            bytes.iter().copied(),
        ))
    }

    /// Build a non-negative number from magnitude bytes, most significant first.
    ///
    /// Leading zero bytes are allowed and do not change the value. An empty
    /// slice is zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::from_natural(<Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(
            BYTE_BITS,
            bytes.iter().copied(),
        ))
    }

    /// Minimal magnitude bytes of |x|, least significant first.
    ///
    /// Zero yields an empty vector.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_asc(&self.magnitude(), BYTE_BITS)
    }

    /// Minimal magnitude bytes of |x|, most significant first.
    ///
    /// Zero yields an empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_desc(&self.magnitude(), BYTE_BITS)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    fn from_natural(digits: Option<Natural>) -> Self {
        match digits {
            Some(natural) => Self {
                value: Integer::from(natural),
            },
            // Every u8 is a valid base-256 digit.
            None => unreachable!("8-bit digit rejected by base-256 import"),
        }
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<Natural> for BigNumber {
    fn from(value: Natural) -> Self {
        Self {
            value: Integer::from(value),
        }
    }
}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    /// Parse a decimal literal with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_str(s)
            .map(Self::from_integer)
            .map_err(|_| ParseBigNumberError(s.to_string()))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
