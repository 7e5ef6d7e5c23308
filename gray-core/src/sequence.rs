//! Full N-bit Gray code sequences
//!
//! Element `i` of the sequence is the Gray code of binary `i`. The order is
//! the binary index order, not the numeric order of the codes.

use std::iter::FusedIterator;

use crate::error::{GrayError, GrayResult};
use crate::types::{BinaryValue, GrayValue};

/// Check that `2^bits` is a usable sequence length and return it.
///
/// Zero is rejected, as is any width whose length can't be indexed on this
/// host. Widths in between are accepted; materialising them is a memory
/// decision left to the caller.
pub fn validate_width(bits: u32) -> GrayResult<usize> {
    if bits == 0 {
        return Err(GrayError::InvalidWidth {
            bits,
            reason: "width must be at least 1",
        });
    }
    if bits >= usize::BITS {
        return Err(GrayError::InvalidWidth {
            bits,
            reason: "2^bits exceeds the addressable sequence length",
        });
    }
    Ok(1usize << bits)
}

/// Lazy iterator over the `2^N` Gray codes of an N-bit width.
#[derive(Debug, Clone)]
pub struct GraySequence {
    next: u64,
    end: u64,
}

impl GraySequence {
    pub fn new(bits: u32) -> GrayResult<Self> {
        let len = validate_width(bits)?;
        Ok(Self {
            next: 0,
            end: len as u64,
        })
    }
}

impl Iterator for GraySequence {
    type Item = GrayValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let code = BinaryValue::new(self.next).to_gray();
        self.next += 1;
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for GraySequence {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(BinaryValue::new(self.end).to_gray())
    }
}

impl ExactSizeIterator for GraySequence {}

impl FusedIterator for GraySequence {}

/// Materialise the whole N-bit sequence.
pub fn gray_sequence(bits: u32) -> GrayResult<Vec<GrayValue>> {
    Ok(GraySequence::new(bits)?.collect())
}
