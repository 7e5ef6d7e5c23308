//! # gray-core — Reflected-binary Gray code
//!
//! Pure, stateless kernel for the reflected-binary Gray code plus the
//! presentation helpers built on top of it.
//!
//! ## Kernel
//!
//! - [`to_gray`] / [`from_gray`]: `n ^ (n >> 1)` and its prefix-XOR inverse
//! - [`gray_sequence`]: the `2^N` codes in binary-index order
//! - [`bit_diff`]: lowest differing bit between two code words
//!
//! ## Presentation
//!
//! - [`notation`]: fixed-width binary strings and input parsing
//! - [`Conversion`]: decimal / binary / Gray converter
//! - [`gray_table`]: N-bit table with changed-bit annotations
//! - [`EncoderDisk`]: rotary encoder disk model and SVG rendering
//!
//! ## Example
//!
//! ```
//! use gray_core::{BinaryValue, bit_diff, gray_sequence};
//!
//! let gray = BinaryValue::new(5).to_gray();
//! assert_eq!(gray.get(), 7);
//! assert_eq!(gray.to_binary(), BinaryValue::new(5));
//!
//! let seq = gray_sequence(3).unwrap();
//! assert_eq!(bit_diff(seq[1], seq[2]).map(|p| p.index()), Some(1));
//! ```

pub mod codec;
pub mod convert;
pub mod diff;
pub mod disk;
pub mod error;
pub mod notation;
pub mod sequence;
pub mod table;
pub mod types;

pub use codec::{from_gray, to_gray};
pub use convert::Conversion;
pub use diff::{bit_diff, is_single_bit_transition};
pub use disk::{DiskTrack, EncoderDisk, MAX_DISK_TRACKS};
pub use error::{GrayError, GrayResult};
pub use sequence::{GraySequence, gray_sequence, validate_width};
pub use table::{GrayCodeRow, gray_table};
pub use types::{BinaryValue, BitPosition, CodeWord, GrayValue};

/// Commonly used items
pub mod prelude {
    pub use crate::{
        BinaryValue, BitPosition, CodeWord, Conversion, EncoderDisk, GrayCodeRow, GrayError,
        GrayResult, GrayValue, bit_diff, from_gray, gray_sequence, gray_table,
        is_single_bit_transition, to_gray,
    };
}

#[cfg(test)]
mod tests;
