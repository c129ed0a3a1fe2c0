//! Ask service — free-text astrology question → short LLM answer.
//!
//! Unlike the horoscope there is no canned fallback: without a working
//! LLM the question cannot be answered and the caller gets an error.

use std::fmt::Write;

use tracing::{info, warn};

use super::{SignError, resolve_sign};
use crate::llm::types::{LlmError, Message};
use crate::state::AppState;
use crate::types::{AiAnswer, BirthDetails};
use crate::zodiac::ZodiacSign;

const SYSTEM_PROMPT: &str = "You are a friendly AI astrologer. Answer the user's astrology question in a simple, \
                             concise way (2-4 sentences maximum).";

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("AI model not available. Please check API key configuration.")]
    LlmNotConfigured,
    #[error(transparent)]
    Sign(#[from] SignError),
    #[error("AI service error: {0}")]
    Llm(#[from] LlmError),
}

/// Answer `question` for the person described by `details`.
///
/// # Errors
///
/// Fails when no LLM is configured, the birth date is invalid, the LLM
/// call fails, or the reply is blank.
pub async fn answer(state: &AppState, question: &str, details: &BirthDetails) -> Result<AiAnswer, AskError> {
    let llm = state.llm.as_ref().ok_or(AskError::LlmNotConfigured)?;
    let sign = resolve_sign(&details.date_of_birth)?;

    info!(sign = %sign, question_len = question.len(), "ask: question received");

    let prompt = build_question_prompt(question, details, sign);
    let response = llm
        .chat(state.max_tokens, SYSTEM_PROMPT, &[Message::user(prompt)])
        .await
        .inspect_err(|e| warn!(error = %e, retryable = e.retryable(), "ask: LLM call failed"))?;

    info!(
        finish_reason = %response.finish_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "ask: LLM response"
    );

    let answer = response.text.trim();
    if answer.is_empty() {
        warn!(finish_reason = %response.finish_reason, "ask: LLM reply had no text");
        return Err(LlmError::EmptyReply { finish_reason: response.finish_reason }.into());
    }

    Ok(AiAnswer {
        answer: answer.to_string(),
        zodiac_sign: Some(sign.name().to_string()),
        question: Some(question.to_string()),
    })
}

pub(crate) fn build_question_prompt(question: &str, details: &BirthDetails, sign: ZodiacSign) -> String {
    let mut prompt = String::from("User Details:\n");
    let _ = writeln!(prompt, "- Name: {}", details.name);
    let _ = writeln!(prompt, "- Zodiac Sign: {sign}");
    let _ = writeln!(prompt, "- Element: {}", sign.element());
    let _ = writeln!(prompt, "- Key Traits: {}", sign.top_traits(3).join(", "));
    let _ = writeln!(prompt, "\nQuestion: <user_input>{question}</user_input>");
    prompt.push_str(
        "\nGive a brief, encouraging astrological insight based on their zodiac sign. \
         Keep it simple, positive, and under 100 words.",
    );
    prompt
}

#[cfg(test)]
#[path = "ask_test.rs"]
mod tests;
