//! Three-way converter between decimal, binary and Gray forms

use serde::{Deserialize, Serialize};

use crate::error::GrayResult;
use crate::notation::{parse_bits, parse_decimal};
use crate::types::{BinaryValue, GrayValue};

/// The same quantity written three ways.
///
/// `binary` and `gray` are unpadded base-2 strings (`"0"` for zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub decimal: u64,
    pub binary: String,
    pub gray: String,
}

impl Conversion {
    pub fn from_value(value: BinaryValue) -> Self {
        Self {
            decimal: value.get(),
            binary: format!("{:b}", value.get()),
            gray: format!("{:b}", value.to_gray().get()),
        }
    }

    pub fn from_decimal(decimal: u64) -> Self {
        Self::from_value(BinaryValue::new(decimal))
    }

    pub fn parse_decimal(text: &str) -> GrayResult<Self> {
        Ok(Self::from_decimal(parse_decimal(text)?))
    }

    /// Read `text` as a plain binary number.
    pub fn from_binary(text: &str) -> GrayResult<Self> {
        Ok(Self::from_value(BinaryValue::new(parse_bits(text)?)))
    }

    /// Read `text` as a Gray code word and decode it.
    pub fn from_gray(text: &str) -> GrayResult<Self> {
        let code = GrayValue::new(parse_bits(text)?);
        Ok(Self::from_value(code.to_binary()))
    }
}
