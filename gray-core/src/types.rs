//! Binary and Gray code words
//!
//! A `u64` is only "binary" or "Gray" by context. The two newtypes make that
//! context part of the type so a Gray code can't be fed where a binary value
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{from_gray, to_gray};

/// Raw access shared by both interpretations.
///
/// Operations that don't care about the interpretation (bit differences, bit
/// extraction) are generic over this trait, but still require both operands
/// to have the same type.
pub trait CodeWord: Copy {
    fn bits(&self) -> u64;

    /// Value of a single bit, 0 = LSB. Positions past 63 read as 0.
    #[inline]
    fn bit(&self, position: u32) -> bool {
        position < u64::BITS && (self.bits() >> position) & 1 == 1
    }
}

/// A plain binary-encoded integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryValue(u64);

impl BinaryValue {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Reflected-binary encoding of this value
    #[inline]
    pub const fn to_gray(self) -> GrayValue {
        GrayValue(to_gray(self.0))
    }
}

/// A reflected-binary Gray code word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrayValue(u64);

impl GrayValue {
    pub const fn new(code: u64) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Binary value this code word encodes
    #[inline]
    pub const fn to_binary(self) -> BinaryValue {
        BinaryValue(from_gray(self.0))
    }
}

impl CodeWord for BinaryValue {
    #[inline]
    fn bits(&self) -> u64 {
        self.0
    }
}

impl CodeWord for GrayValue {
    #[inline]
    fn bits(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BinaryValue {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BinaryValue> for GrayValue {
    fn from(value: BinaryValue) -> Self {
        value.to_gray()
    }
}

impl From<GrayValue> for BinaryValue {
    fn from(code: GrayValue) -> Self {
        code.to_binary()
    }
}

/// Decimal, since a binary value is the number itself.
impl fmt::Display for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base-2 digits, unpadded; a codeword only means something bit by bit.
/// Use [`crate::notation::to_binary_string`] for a fixed width.
impl fmt::Display for GrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

/// Index of a bit, 0 = least significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitPosition(u32);

impl BitPosition {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Place value `2^index`
    pub const fn weight(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bit {} (2^{})", self.0, self.0)
    }
}
