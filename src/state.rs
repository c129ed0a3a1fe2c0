//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The server keeps nothing between requests; the only shared piece is the
//! optional LLM client.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum, so the LLM client is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Output token cap per LLM call. `None` leaves the budget to the
    /// model, which thinking models need for their reasoning tokens.
    pub max_tokens: Option<u32>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm, max_tokens: None }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn ai_available(&self) -> bool {
        self.llm.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
