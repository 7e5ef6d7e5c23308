//! Errors for width validation and notation parsing

use thiserror::Error;

pub type GrayResult<T> = Result<T, GrayError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrayError {
    #[error("Invalid bit width {bits}: {reason}")]
    InvalidWidth { bits: u32, reason: &'static str },

    #[error("Invalid decimal value '{0}': expected a non-negative integer that fits in 64 bits")]
    InvalidDecimal(String),

    #[error("Invalid binary value '{0}': expected 1 to 64 digits of 0 and 1")]
    InvalidBinary(String),

    #[error("Sector {sector} out of range for a disk with {sectors} sectors")]
    SectorOutOfRange { sector: u64, sectors: u64 },

    #[error("Track {track} out of range for a disk with {tracks} tracks")]
    TrackOutOfRange { track: u32, tracks: u32 },
}

impl GrayError {
    /// Stable machine-readable code, used by the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            GrayError::InvalidWidth { .. } => "INVALID_WIDTH",
            GrayError::InvalidDecimal(_) => "INVALID_DECIMAL",
            GrayError::InvalidBinary(_) => "INVALID_BINARY",
            GrayError::SectorOutOfRange { .. } => "SECTOR_OUT_OF_RANGE",
            GrayError::TrackOutOfRange { .. } => "TRACK_OUT_OF_RANGE",
        }
    }
}
