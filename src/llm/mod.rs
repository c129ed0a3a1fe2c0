//! LLM — Gemini access for horoscope forecasts and question answering.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. `LlmClient` pairs a
//! [`gemini::GeminiClient`] with the configured model; services only ever
//! see it through the `LlmChat` trait, so tests can script replies.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

/// The production model client, built by [`LlmClient::from_env`].
pub struct LlmClient {
    gemini: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build a client from environment variables. See [`LlmConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let gemini = gemini::GeminiClient::new(config.api_key, config.timeouts)?;
        Ok(Self { gemini, model: config.model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: Option<u32>, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.gemini.chat(&self.model, max_tokens, system, messages).await
    }
}
