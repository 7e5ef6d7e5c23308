//! Raw reflected-binary encoding over `u64`
//!
//! Both maps are bijections on the full 64-bit domain, not only on a
//! bounded `[0, 2^N)` range.

/// Encode a binary integer as its reflected-binary Gray code.
#[inline]
pub const fn to_gray(n: u64) -> u64 {
    n ^ (n >> 1)
}

/// Decode a Gray code back to the binary integer it came from.
///
/// Each binary bit is the XOR of all Gray bits from its own position up to
/// the most significant one.
#[inline]
pub const fn from_gray(mut gray: u64) -> u64 {
    let mut mask = gray >> 1;
    while mask != 0 {
        gray ^= mask;
        mask >>= 1;
    }
    gray
}
