//! Text forms of code words
//!
//! Rendering to fixed-width binary strings and parsing user-entered decimal
//! or binary text. The kernel itself never sees unparsed input.

use crate::error::{GrayError, GrayResult};

/// Base-2 rendering of `value`, left-padded with zeros to `width` characters.
///
/// A rendering already longer than `width` is returned whole.
pub fn to_binary_string(value: u64, width: u32) -> String {
    format!("{:0>width$b}", value, width = width as usize)
}

/// Parse a non-negative decimal integer.
pub fn parse_decimal(text: &str) -> GrayResult<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GrayError::InvalidDecimal(text.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| GrayError::InvalidDecimal(text.to_string()))
}

/// Parse a string of `0`/`1` digits, most significant first.
pub fn parse_bits(text: &str) -> GrayResult<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || trimmed.len() > u64::BITS as usize
        || !trimmed.bytes().all(|b| b == b'0' || b == b'1')
    {
        return Err(GrayError::InvalidBinary(text.to_string()));
    }
    u64::from_str_radix(trimmed, 2).map_err(|_| GrayError::InvalidBinary(text.to_string()))
}

/// Number of binary digits needed to write `value` (at least 1).
pub fn bit_length(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}
