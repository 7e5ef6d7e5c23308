//! Shared handler state

use std::sync::Arc;

use gray_assistant::AssistantClient;
use gray_core::MAX_DISK_TRACKS;

/// Bit-width range served to clients.
///
/// Large tables are a rendering problem, not a correctness one, so requests
/// are clamped into this range instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub max_bits: u32,
    /// Width for tables and sequences when a request names none
    pub default_bits: u32,
    /// Width for encoder disks when a request names none
    pub default_disk_bits: u32,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::new(12, 4, 5)
    }
}

impl DisplayLimits {
    pub fn new(max_bits: u32, default_bits: u32, default_disk_bits: u32) -> Self {
        let max_bits = max_bits.clamp(1, MAX_DISK_TRACKS);
        Self {
            max_bits,
            default_bits: default_bits.clamp(1, max_bits),
            default_disk_bits: default_disk_bits.clamp(1, max_bits),
        }
    }

    /// Table or sequence width for a request, and whether it was clamped
    pub fn clamp(&self, requested: Option<u32>) -> (u32, bool) {
        self.clamp_or(requested, self.default_bits)
    }

    /// Disk width for a request, and whether it was clamped
    pub fn clamp_disk(&self, requested: Option<u32>) -> (u32, bool) {
        self.clamp_or(requested, self.default_disk_bits)
    }

    fn clamp_or(&self, requested: Option<u32>, default: u32) -> (u32, bool) {
        let wanted = requested.unwrap_or(default);
        let bits = wanted.clamp(1, self.max_bits);
        (bits, bits != wanted)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantClient>,
    pub limits: DisplayLimits,
}

impl AppState {
    pub fn new(assistant: AssistantClient, limits: DisplayLimits) -> Self {
        Self {
            assistant: Arc::new(assistant),
            limits,
        }
    }
}
