//! N-bit Gray code tables

use serde::{Deserialize, Serialize};

use crate::diff::bit_diff;
use crate::error::GrayResult;
use crate::notation::to_binary_string;
use crate::sequence::GraySequence;
use crate::types::{BitPosition, GrayValue};

/// One row of the table: the index, its binary and Gray forms padded to the
/// table width, and the bit that flipped since the previous row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrayCodeRow {
    pub decimal: u64,
    pub binary: String,
    pub gray: String,
    /// `None` on the first row
    pub changed_bit: Option<BitPosition>,
}

/// Build the full table for an N-bit width.
pub fn gray_table(bits: u32) -> GrayResult<Vec<GrayCodeRow>> {
    let sequence = GraySequence::new(bits)?;
    let mut rows = Vec::with_capacity(sequence.len());
    let mut prev: Option<GrayValue> = None;

    for (index, code) in sequence.enumerate() {
        let decimal = index as u64;
        rows.push(GrayCodeRow {
            decimal,
            binary: to_binary_string(decimal, bits),
            gray: to_binary_string(code.get(), bits),
            changed_bit: prev.and_then(|p| bit_diff(p, code)),
        });
        prev = Some(code);
    }

    Ok(rows)
}
