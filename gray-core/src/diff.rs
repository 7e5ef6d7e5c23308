//! Bit differences between code words

use crate::types::{BitPosition, CodeWord};

/// Lowest bit position at which `prev` and `curr` differ, or `None` when they
/// are equal.
///
/// This does not certify that only one bit changed: values that differ in
/// several bits still report the lowest of them. Use
/// [`is_single_bit_transition`] for that.
#[inline]
pub fn bit_diff<T: CodeWord>(prev: T, curr: T) -> Option<BitPosition> {
    let diff = prev.bits() ^ curr.bits();
    if diff == 0 {
        return None;
    }
    Some(BitPosition::new(diff.trailing_zeros()))
}

/// True when `prev` and `curr` differ in exactly one bit.
#[inline]
pub fn is_single_bit_transition<T: CodeWord>(prev: T, curr: T) -> bool {
    (prev.bits() ^ curr.bits()).is_power_of_two()
}
