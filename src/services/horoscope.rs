//! Horoscope service — birth details → sign → LLM forecast.
//!
//! DESIGN
//! ======
//! The LLM is asked for five traits and a short forecast in a fixed
//! two-line format. When the reply does not contain both lines, the LLM
//! call fails, or no LLM is configured, the canned traits and prediction
//! from the zodiac table are used instead. A horoscope request therefore
//! only fails on a bad birth date.

use std::fmt::Write;

use tracing::{info, warn};

use super::{SignError, resolve_sign};
use crate::llm::types::Message;
use crate::state::AppState;
use crate::types::{BirthDetails, HoroscopeResult};
use crate::zodiac::ZodiacSign;

const TRAIT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoroscopeError {
    #[error(transparent)]
    Sign(#[from] SignError),
}

/// Where the traits and forecast of a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastSource {
    Llm,
    Canned,
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate a horoscope for `details`.
///
/// # Errors
///
/// Returns an error only when the birth date is invalid or has no sign.
pub async fn generate(state: &AppState, details: &BirthDetails) -> Result<HoroscopeResult, HoroscopeError> {
    let sign = resolve_sign(&details.date_of_birth)?;
    let (traits, forecast, source) = forecast(state, details, sign).await;

    info!(sign = %sign, ?source, traits = traits.len(), "horoscope: generated");

    Ok(HoroscopeResult {
        zodiac_sign: sign.name().to_string(),
        element: sign.element().to_string(),
        personality_traits: traits,
        predictions: forecast,
        birth_details: Some(details.clone()),
    })
}

async fn forecast(state: &AppState, details: &BirthDetails, sign: ZodiacSign) -> (Vec<String>, String, ForecastSource) {
    let canned = || (sign.top_traits(TRAIT_COUNT), sign.predictions().to_string(), ForecastSource::Canned);

    let Some(llm) = &state.llm else {
        return canned();
    };

    let prompt = build_horoscope_prompt(details, sign);
    match llm
        .chat(state.max_tokens, "", &[Message::user(prompt)])
        .await
    {
        Ok(response) => {
            info!(
                finish_reason = %response.finish_reason,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "horoscope: LLM response"
            );
            match parse_forecast(&response.text) {
                Some((traits, forecast)) => (traits, forecast, ForecastSource::Llm),
                None => {
                    warn!("horoscope: LLM reply missing TRAITS/FORECAST lines, using canned data");
                    canned()
                }
            }
        }
        Err(e) => {
            warn!(error = %e, retryable = e.retryable(), "horoscope: LLM call failed, using canned data");
            canned()
        }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

pub(crate) fn build_horoscope_prompt(details: &BirthDetails, sign: ZodiacSign) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Generate a personalized horoscope for {} based on their zodiac sign {sign}.",
        details.name
    );
    prompt.push('\n');
    prompt.push_str("Birth Details:\n");
    let _ = writeln!(prompt, "- Date: {}", details.date_of_birth);
    let _ = writeln!(prompt, "- Time: {}", details.time_of_birth);
    let _ = writeln!(prompt, "- Place: {}", details.place_of_birth);
    let _ = writeln!(prompt, "- Zodiac: {sign} ({} element)", sign.element());
    prompt.push_str(
        "\nProvide:\n\
         1. 5 key personality traits (comma-separated)\n\
         2. A brief yearly forecast (2-3 sentences)\n\n\
         Format your response exactly like this:\n\
         TRAITS: trait1, trait2, trait3, trait4, trait5\n\
         FORECAST: Your forecast text here...",
    );
    prompt
}

// =============================================================================
// REPLY PARSING
// =============================================================================

/// Extract `(traits, forecast)` from a `TRAITS:` / `FORECAST:` reply.
///
/// The first line starting with each tag wins. Returns `None` unless both
/// tags are present.
pub(crate) fn parse_forecast(text: &str) -> Option<(Vec<String>, String)> {
    let tagged = |tag: &str| {
        text.lines()
            .find_map(|line| line.trim_start().strip_prefix(tag))
    };

    let traits_line = tagged("TRAITS:")?;
    let forecast_line = tagged("FORECAST:")?;

    let traits = traits_line
        .split(',')
        .map(|t| t.trim().to_string())
        .collect();
    Some((traits, forecast_line.trim().to_string()))
}

#[cfg(test)]
#[path = "horoscope_test.rs"]
mod tests;
