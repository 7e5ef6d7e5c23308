//! Request handlers for API endpoints

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::header,
    response::IntoResponse,
};
use gray_core::{
    BinaryValue, Conversion, EncoderDisk, bit_diff, gray_sequence, gray_table,
    is_single_bit_transition, notation::parse_decimal,
};

use crate::error::ApiFailure;
use crate::models::*;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiFailure>;

const VERSION: &str = "2026.1.16";

// ============================================================================
// Handler Functions
// ============================================================================

/// Convert a value between decimal, binary and Gray code
#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "conversion",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion successful", body = ApiResponse<ConversionResult>),
        (status = 400, description = "Malformed value", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn convert_handler(
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> ApiResult<ConversionResult> {
    let Json(req) = payload?;
    let conversion = match req.from {
        ConvertFrom::Decimal => Conversion::parse_decimal(&req.value)?,
        ConvertFrom::Binary => Conversion::from_binary(&req.value)?,
        ConvertFrom::Gray => Conversion::from_gray(&req.value)?,
    };
    Ok(Json(ApiResponse::success(conversion.into())))
}

/// N-bit Gray code table with changed-bit annotations
#[utoipa::path(
    get,
    path = "/api/table",
    tag = "sequences",
    params(BitsQuery),
    responses(
        (status = 200, description = "Table rows", body = ApiResponse<TableResult>),
        (status = 400, description = "Malformed query string", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn table_handler(
    State(state): State<AppState>,
    query: Result<Query<BitsQuery>, QueryRejection>,
) -> ApiResult<TableResult> {
    let Query(query) = query?;
    let (bits, clamped) = state.limits.clamp(query.bits);
    let rows = gray_table(bits)?.into_iter().map(TableRow::from).collect();
    Ok(Json(ApiResponse::success(TableResult {
        bits,
        clamped,
        rows,
    })))
}

/// Raw N-bit Gray code sequence in binary-index order
#[utoipa::path(
    get,
    path = "/api/sequence",
    tag = "sequences",
    params(BitsQuery),
    responses(
        (status = 200, description = "Sequence values", body = ApiResponse<SequenceResult>),
        (status = 400, description = "Malformed query string", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn sequence_handler(
    State(state): State<AppState>,
    query: Result<Query<BitsQuery>, QueryRejection>,
) -> ApiResult<SequenceResult> {
    let Query(query) = query?;
    let (bits, clamped) = state.limits.clamp(query.bits);
    let values = gray_sequence(bits)?.into_iter().map(|g| g.get()).collect();
    Ok(Json(ApiResponse::success(SequenceResult {
        bits,
        clamped,
        values,
    })))
}

/// Lowest differing bit between two values
#[utoipa::path(
    get,
    path = "/api/diff",
    tag = "sequences",
    params(DiffQuery),
    responses(
        (status = 200, description = "Bit difference", body = ApiResponse<DiffResult>),
        (status = 400, description = "Malformed operand", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn diff_handler(
    query: Result<Query<DiffQuery>, QueryRejection>,
) -> ApiResult<DiffResult> {
    let Query(query) = query?;
    let prev = BinaryValue::new(parse_decimal(&query.prev)?);
    let curr = BinaryValue::new(parse_decimal(&query.curr)?);
    Ok(Json(ApiResponse::success(DiffResult {
        changed_bit: bit_diff(prev, curr).map(|p| p.index()),
        single_bit: is_single_bit_transition(prev, curr),
        xor: prev.get() ^ curr.get(),
    })))
}

/// Rotary encoder disk layout
#[utoipa::path(
    get,
    path = "/api/disk",
    tag = "visualization",
    params(BitsQuery),
    responses(
        (status = 200, description = "Disk tracks", body = ApiResponse<DiskResult>),
        (status = 400, description = "Malformed query string", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn disk_handler(
    State(state): State<AppState>,
    query: Result<Query<BitsQuery>, QueryRejection>,
) -> ApiResult<DiskResult> {
    let Query(query) = query?;
    let (bits, clamped) = state.limits.clamp_disk(query.bits);
    let disk = EncoderDisk::new(bits)?;
    Ok(Json(ApiResponse::success(DiskResult::new(&disk, clamped))))
}

/// Rotary encoder disk rendered as SVG
#[utoipa::path(
    get,
    path = "/api/disk.svg",
    tag = "visualization",
    params(BitsQuery),
    responses(
        (status = 200, description = "SVG image", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Malformed query string", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn disk_svg_handler(
    State(state): State<AppState>,
    query: Result<Query<BitsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiFailure> {
    let Query(query) = query?;
    let (bits, _) = state.limits.clamp_disk(query.bits);
    let disk = EncoderDisk::new(bits)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], disk.to_svg()))
}

/// Ask the search-grounded assistant a question
#[utoipa::path(
    post,
    path = "/api/assistant",
    tag = "assistant",
    request_body = AssistantRequest,
    responses(
        (status = 200, description = "Answer, or the fallback text when the model is unavailable", body = ApiResponse<AnswerResult>),
        (status = 400, description = "Empty query", body = ApiResponse<()>),
    ),
    security(("api_key" = []))
)]
pub async fn assistant_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> ApiResult<AnswerResult> {
    let Json(req) = payload?;
    if req.query.trim().is_empty() {
        return Err(ApiFailure::EmptyQuery);
    }
    let answer = state.assistant.search(&req.query).await;
    Ok(Json(ApiResponse::success(answer.into())))
}

/// Get tool information
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "introspection",
    responses(
        (status = 200, description = "Tool information", body = ApiResponse<ToolInfo>),
    )
)]
pub async fn info_handler(State(state): State<AppState>) -> Json<ApiResponse<ToolInfo>> {
    Json(ApiResponse::success(ToolInfo {
        name: "Gray Code Explorer",
        version: VERSION,
        description: "Explore the reflected-binary Gray code: conversions, tables, encoder disks and a search-grounded assistant",
        features: vec![
            "Decimal / binary / Gray conversion",
            "N-bit Gray code tables with changed-bit highlighting",
            "Bit difference analysis",
            "Rotary encoder disk (JSON and SVG)",
            "Search-grounded assistant",
        ],
        max_bits: state.limits.max_bits,
        assistant_enabled: state.assistant.is_configured(),
    }))
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck),
    )
)]
pub async fn health_handler() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy",
        version: VERSION,
    })
}
