//! Data models for API requests and responses

use gray_assistant::{AiResponse, SearchSource};
use gray_core::{Conversion, DiskTrack, EncoderDisk, GrayCodeRow};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============================================================================
// Request Models
// ============================================================================

/// Which representation the converter input is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConvertFrom {
    Decimal,
    Binary,
    Gray,
}

/// Request body for the converter
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Representation of `value`
    #[schema(example = "gray")]
    pub from: ConvertFrom,

    /// Value as entered by the user
    #[schema(example = "111")]
    pub value: String,
}

/// Bit width selector for table, sequence and disk endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BitsQuery {
    /// Requested bit width; clamped to the server's display range
    #[param(example = 4)]
    pub bits: Option<u32>,
}

/// Operands of the bit-diff endpoint, as decimal text
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiffQuery {
    #[param(example = "2")]
    pub prev: String,
    #[param(example = "3")]
    pub curr: String,
}

/// Request body for the assistant
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssistantRequest {
    /// Free-text question
    #[schema(example = "Why do rotary encoders use Gray code?")]
    pub query: String,
}

// ============================================================================
// Response Models
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error information (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Error information in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Error code (e.g., "INVALID_BINARY", "RATE_LIMITED")
    #[schema(example = "INVALID_BINARY")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Invalid binary value '102': expected 1 to 64 digits of 0 and 1")]
    pub message: String,

    /// Helpful suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// One value in decimal, binary and Gray form
#[derive(Debug, Serialize, ToSchema)]
pub struct ConversionResult {
    #[schema(example = 5)]
    pub decimal: u64,
    #[schema(example = "101")]
    pub binary: String,
    #[schema(example = "111")]
    pub gray: String,
}

impl From<Conversion> for ConversionResult {
    fn from(c: Conversion) -> Self {
        Self {
            decimal: c.decimal,
            binary: c.binary,
            gray: c.gray,
        }
    }
}

/// Row of an N-bit table
#[derive(Debug, Serialize, ToSchema)]
pub struct TableRow {
    #[schema(example = 2)]
    pub decimal: u64,
    #[schema(example = "0010")]
    pub binary: String,
    #[schema(example = "0011")]
    pub gray: String,
    /// Bit that flipped since the previous row (absent on row 0)
    #[schema(example = 1)]
    pub changed_bit: Option<u32>,
}

impl From<GrayCodeRow> for TableRow {
    fn from(row: GrayCodeRow) -> Self {
        Self {
            decimal: row.decimal,
            binary: row.binary,
            gray: row.gray,
            changed_bit: row.changed_bit.map(|p| p.index()),
        }
    }
}

/// Full N-bit table
#[derive(Debug, Serialize, ToSchema)]
pub struct TableResult {
    /// Width actually used
    #[schema(example = 4)]
    pub bits: u32,
    /// Whether the requested width was clamped
    pub clamped: bool,
    pub rows: Vec<TableRow>,
}

/// Raw Gray codes in binary-index order
#[derive(Debug, Serialize, ToSchema)]
pub struct SequenceResult {
    #[schema(example = 2)]
    pub bits: u32,
    pub clamped: bool,
    #[schema(example = json!([0, 1, 3, 2]))]
    pub values: Vec<u64>,
}

/// Bit difference between two values
#[derive(Debug, Serialize, ToSchema)]
pub struct DiffResult {
    /// Lowest differing bit, absent when the values are equal
    #[schema(example = 0)]
    pub changed_bit: Option<u32>,
    /// True when exactly one bit differs
    pub single_bit: bool,
    /// `prev XOR curr`
    #[schema(example = 1)]
    pub xor: u64,
}

/// One encoder track
#[derive(Debug, Serialize, ToSchema)]
pub struct TrackView {
    #[schema(example = 0)]
    pub bit: u32,
    /// Fill state per sector, in angular order
    pub active: Vec<bool>,
}

impl From<DiskTrack> for TrackView {
    fn from(track: DiskTrack) -> Self {
        Self {
            bit: track.bit,
            active: track.active,
        }
    }
}

/// Rotary encoder disk layout
#[derive(Debug, Serialize, ToSchema)]
pub struct DiskResult {
    #[schema(example = 5)]
    pub bits: u32,
    pub clamped: bool,
    #[schema(example = 32)]
    pub sectors: u64,
    /// Innermost (LSB) first
    pub tracks: Vec<TrackView>,
}

impl DiskResult {
    pub fn new(disk: &EncoderDisk, clamped: bool) -> Self {
        Self {
            bits: disk.bits(),
            clamped,
            sectors: disk.sectors(),
            tracks: disk.tracks().into_iter().map(TrackView::from).collect(),
        }
    }
}

/// Cited web page
#[derive(Debug, Serialize, ToSchema)]
pub struct SourceView {
    #[schema(example = "Gray code - Wikipedia")]
    pub title: String,
    #[schema(example = "https://en.wikipedia.org/wiki/Gray_code")]
    pub url: String,
}

impl From<SearchSource> for SourceView {
    fn from(s: SearchSource) -> Self {
        Self {
            title: s.title,
            url: s.url,
        }
    }
}

/// Assistant answer
#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResult {
    /// Markdown answer text
    pub text: String,
    pub sources: Vec<SourceView>,
}

impl From<AiResponse> for AnswerResult {
    fn from(r: AiResponse) -> Self {
        Self {
            text: r.text,
            sources: r.sources.into_iter().map(SourceView::from).collect(),
        }
    }
}

/// Tool information
#[derive(Debug, Serialize, ToSchema)]
pub struct ToolInfo {
    #[schema(example = "Gray Code Explorer")]
    pub name: &'static str,
    #[schema(example = "2026.1.16")]
    pub version: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    /// Largest bit width served by table, sequence and disk endpoints
    #[schema(example = 12)]
    pub max_bits: u32,
    /// Whether the assistant has a credential
    pub assistant_enabled: bool,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    #[schema(example = "healthy")]
    pub status: &'static str,

    /// Service version
    #[schema(example = "2026.1.16")]
    pub version: &'static str,
}
