//! Handler and middleware errors and their HTTP mapping

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gray_core::GrayError;
use thiserror::Error;

use crate::models::{ApiError, ApiResponse};

#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error(transparent)]
    Gray(#[from] GrayError),

    #[error("Query is empty")]
    EmptyQuery,

    /// Body or query string the extractors could not read
    #[error("{0}")]
    BadRequest(String),

    #[error("API key required")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Too many requests")]
    RateLimited {
        requests_per_second: u32,
        burst_size: u32,
    },
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        ApiFailure::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiFailure {
    fn from(rejection: QueryRejection) -> Self {
        ApiFailure::BadRequest(rejection.body_text())
    }
}

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiFailure::MissingApiKey | ApiFailure::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiFailure::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiFailure::Gray(err) => err.code(),
            ApiFailure::EmptyQuery => "EMPTY_QUERY",
            ApiFailure::BadRequest(_) => "INVALID_REQUEST",
            ApiFailure::MissingApiKey | ApiFailure::InvalidApiKey => "UNAUTHORIZED",
            ApiFailure::RateLimited { .. } => "RATE_LIMITED",
        }
    }

    fn help(&self) -> Option<String> {
        let help = match self {
            ApiFailure::Gray(GrayError::InvalidDecimal(_)) => "Enter a non-negative whole number",
            ApiFailure::Gray(GrayError::InvalidBinary(_)) => "Use only the digits 0 and 1",
            ApiFailure::Gray(_) => return None,
            ApiFailure::EmptyQuery => "Ask a question about Gray codes",
            ApiFailure::BadRequest(_) => {
                "Check the request against the schema at /api-docs/openapi.json"
            }
            ApiFailure::MissingApiKey => "Provide an API key in the X-API-Key header",
            ApiFailure::InvalidApiKey => "Provide a valid API key in the X-API-Key header",
            ApiFailure::RateLimited {
                requests_per_second,
                burst_size,
            } => {
                return Some(format!(
                    "Rate limit: {} requests/second, burst: {}",
                    requests_per_second, burst_size
                ));
            }
        };
        Some(help.to_string())
    }

    fn to_api_error(&self) -> ApiError {
        ApiError {
            code: self.code().to_string(),
            message: self.to_string(),
            help: self.help(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, code = self.code(), "rejecting request");
        let body = ApiResponse::<()>::error(self.to_api_error());
        (self.status(), Json(body)).into_response()
    }
}
