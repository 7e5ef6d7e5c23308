//! # gray-assistant — Search-grounded Gray code assistant
//!
//! Thin client for a hosted language model with Google Search grounding.
//! One request per question, no streaming, no retries.
//!
//! The client is built once from an [`AssistantConfig`] and handed to
//! whatever needs it; nothing here is global.
//!
//! ```ignore
//! use gray_assistant::{AssistantClient, AssistantConfig};
//!
//! let client = AssistantClient::new(AssistantConfig::from_env())?;
//! let answer = client.search("Who invented the Gray code?").await;
//! println!("{}", answer.text);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{AssistantClient, FALLBACK_TEXT, SYSTEM_INSTRUCTION};
pub use config::AssistantConfig;
pub use error::{AssistantError, AssistantResult};
pub use response::{AiResponse, SearchSource};
