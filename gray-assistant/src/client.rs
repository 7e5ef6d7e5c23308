//! Model client

use reqwest::Client;
use serde_json::{Value, json};

use crate::config::AssistantConfig;
use crate::error::{AssistantError, AssistantResult};
use crate::response::{AiResponse, GenerateContentResponse};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert mathematician and computer scientist specializing in digital logic and coding theory. \
Provide concise, accurate, and up-to-date information about Gray Codes, their history, applications (like rotary encoders, Karnaugh maps, error correction), and properties. \
When using Google Search, explicitly summarize the findings. Format your response with Markdown.";

pub const FALLBACK_TEXT: &str =
    "Error fetching data from Gemini. Please check your API key and connection.";

pub const EMPTY_TEXT: &str = "No response generated.";

/// Long-lived client; construct once and share (e.g. behind an `Arc`).
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: Client,
    config: AssistantConfig,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> AssistantResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Ask a question, turning every failure into the fallback answer.
    pub async fn search(&self, query: &str) -> AiResponse {
        match self.try_search(query).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "assistant request failed");
                Self::fallback()
            }
        }
    }

    /// Ask a question, reporting failures to the caller.
    pub async fn try_search(&self, query: &str) -> AssistantResult<AiResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::EmptyQuery);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey)?;

        tracing::debug!(model = %self.config.model, chars = query.len(), "sending assistant request");

        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "assistant endpoint rejected request");
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let answer = parse_body(&body)?;
        tracing::info!(sources = answer.sources.len(), "assistant answered");
        Ok(answer)
    }

    pub fn fallback() -> AiResponse {
        AiResponse {
            text: FALLBACK_TEXT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// JSON body of a `generateContent` call with search grounding enabled
pub(crate) fn request_body(query: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": query } ] }
        ],
        "systemInstruction": {
            "parts": [ { "text": SYSTEM_INSTRUCTION } ]
        },
        "tools": [
            { "google_search": {} }
        ]
    })
}

pub(crate) fn parse_body(body: &str) -> AssistantResult<AiResponse> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text = parsed.text();
    Ok(AiResponse {
        text: if text.is_empty() {
            EMPTY_TEXT.to_string()
        } else {
            text
        },
        sources: parsed.sources(),
    })
}
