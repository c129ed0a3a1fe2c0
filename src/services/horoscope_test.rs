use super::*;
use crate::llm::types::LlmError;
use crate::state::test_helpers::{self, MockLlm};
use std::sync::Arc;

fn leo_details() -> BirthDetails {
    BirthDetails {
        name: "Ada".into(),
        date_of_birth: "1990-08-01".into(),
        time_of_birth: "14:30".into(),
        place_of_birth: "London, UK".into(),
    }
}

// =========================================================================
// parse_forecast
// =========================================================================

#[test]
fn parse_well_formed_reply() {
    let text = "TRAITS: Bold, Warm , Generous,Loyal, Proud\nFORECAST:  A strong year ahead. ";
    let (traits, forecast) = parse_forecast(text).unwrap();
    assert_eq!(traits, vec!["Bold", "Warm", "Generous", "Loyal", "Proud"]);
    assert_eq!(forecast, "A strong year ahead.");
}

#[test]
fn parse_ignores_surrounding_chatter() {
    let text = "Here you go!\n\n  TRAITS: Bold\nFORECAST: Bright.\nTRAITS: ignored";
    let (traits, forecast) = parse_forecast(text).unwrap();
    assert_eq!(traits, vec!["Bold"]);
    assert_eq!(forecast, "Bright.");
}

#[test]
fn parse_requires_both_tags() {
    assert!(parse_forecast("TRAITS: Bold, Warm").is_none());
    assert!(parse_forecast("FORECAST: Bright.").is_none());
    assert!(parse_forecast("").is_none());
}

// =========================================================================
// build_horoscope_prompt
// =========================================================================

#[test]
fn prompt_carries_birth_details_and_format() {
    let prompt = build_horoscope_prompt(&leo_details(), ZodiacSign::Leo);
    assert!(prompt.contains("horoscope for Ada based on their zodiac sign Leo"));
    assert!(prompt.contains("- Place: London, UK"));
    assert!(prompt.contains("- Zodiac: Leo (Fire element)"));
    assert!(prompt.contains("TRAITS: trait1, trait2, trait3, trait4, trait5"));
    assert!(prompt.ends_with("FORECAST: Your forecast text here..."));
}

// =========================================================================
// generate
// =========================================================================

#[tokio::test]
async fn generate_without_llm_uses_canned_data() {
    let state = test_helpers::test_app_state();
    let result = generate(&state, &leo_details()).await.unwrap();
    assert_eq!(result.zodiac_sign, "Leo");
    assert_eq!(result.element, "Fire");
    assert_eq!(result.personality_traits, ZodiacSign::Leo.top_traits(5));
    assert_eq!(result.predictions, ZodiacSign::Leo.predictions());
    assert_eq!(result.birth_details, Some(leo_details()));
}

#[tokio::test]
async fn generate_uses_parsed_llm_reply() {
    let llm = Arc::new(MockLlm::replying("TRAITS: Bold, Warm\nFORECAST: A strong year ahead."));
    let state = test_helpers::test_app_state_with_llm(llm.clone());
    let result = generate(&state, &leo_details()).await.unwrap();
    assert_eq!(result.personality_traits, vec!["Bold", "Warm"]);
    assert_eq!(result.predictions, "A strong year ahead.");

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].1[0].content.contains("zodiac sign Leo"));
}

#[tokio::test]
async fn generate_falls_back_on_unparseable_reply() {
    let llm = Arc::new(MockLlm::replying("The stars are cloudy today."));
    let state = test_helpers::test_app_state_with_llm(llm);
    let result = generate(&state, &leo_details()).await.unwrap();
    assert_eq!(result.personality_traits, ZodiacSign::Leo.top_traits(5));
    assert_eq!(result.predictions, ZodiacSign::Leo.predictions());
}

#[tokio::test]
async fn generate_falls_back_on_llm_error() {
    let llm = Arc::new(MockLlm::failing(LlmError::ApiResponse { status: 503, body: "busy".into() }));
    let state = test_helpers::test_app_state_with_llm(llm);
    let result = generate(&state, &leo_details()).await.unwrap();
    assert_eq!(result.zodiac_sign, "Leo");
    assert_eq!(result.predictions, ZodiacSign::Leo.predictions());
}

#[tokio::test]
async fn generate_rejects_invalid_date() {
    let state = test_helpers::test_app_state();
    let mut details = leo_details();
    details.date_of_birth = "08/01/1990".into();
    let err = generate(&state, &details).await.unwrap_err();
    assert_eq!(err, HoroscopeError::Sign(SignError::InvalidDate));
    assert_eq!(err.to_string(), "Invalid date format. Use YYYY-MM-DD");
}
