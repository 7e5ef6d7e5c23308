//! Assistant errors

use thiserror::Error;

pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("No API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("Query is empty")]
    EmptyQuery,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed model response: {0}")]
    Decode(#[from] serde_json::Error),
}
