use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_with_google_key() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("GOOGLE_AI_API_KEY", "g-secret")])).unwrap();
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.api_key, "g-secret");
    assert_eq!(cfg.timeouts, LlmTimeouts::default());
}

#[test]
fn key_var_and_overrides_are_honored() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "ASTRO_GEMINI_KEY"),
        ("ASTRO_GEMINI_KEY", "secret"),
        ("GOOGLE_AI_API_KEY", "ignored"),
        ("LLM_MODEL", "gemini-2.5-flash"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn invalid_timeout_and_blank_model_fall_back() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("GOOGLE_AI_API_KEY", "g"),
        ("LLM_MODEL", ""),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn missing_key_names_the_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GOOGLE_AI_API_KEY"));

    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "OTHER")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "OTHER"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("GOOGLE_AI_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}
