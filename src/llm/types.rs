//! LLM types — the chat seam between the services and Gemini.
//!
//! Services build one user [`Message`] (plus an optional system prompt) and
//! read back a single text reply. A reply with no text is an error, never an
//! empty success.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The API key environment variable is unset or blank.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The model finished without producing any text, e.g. a safety block
    /// or an output budget spent entirely on thinking.
    #[error("model returned no text (finish reason: {finish_reason})")]
    EmptyReply { finish_reason: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Whether a later identical request could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

/// One model reply. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub text: String,
    pub model: String,
    /// Provider finish reason as sent, e.g. `STOP` or `MAX_TOKENS`.
    pub finish_reason: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Object-safe chat seam. Lets tests swap in a scripted model.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send one chat turn. `max_tokens` of `None` leaves the output budget to
    /// the provider.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is
    /// malformed, or the model produced no text.
    async fn chat(&self, max_tokens: Option<u32>, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
