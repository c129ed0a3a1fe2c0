use super::*;
use crate::state::test_helpers::{self, MockLlm};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn leo_body() -> Value {
    json!({
        "name": "Ada",
        "dateOfBirth": "1990-08-01",
        "timeOfBirth": "14:30",
        "placeOfBirth": "London"
    })
}

// =============================================================================
// GET / and /health
// =============================================================================

#[tokio::test]
async fn index_lists_endpoints() {
    let (status, body) = send(app(test_helpers::test_app_state()), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "AI Astrologer API");
    assert!(body["endpoints"]["/horoscope"].is_string());
    assert!(body["endpoints"]["/ask"].is_string());
}

#[tokio::test]
async fn health_reports_ai_availability() {
    let (status, body) = send(app(test_helpers::test_app_state()), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai_model_available"], false);
    assert!(body["timestamp"].as_str().is_some_and(|t| t.contains('T')));

    let llm = Arc::new(MockLlm::replying("hi"));
    let (_, body) = send(app(test_helpers::test_app_state_with_llm(llm)), "GET", "/health", None).await;
    assert_eq!(body["ai_model_available"], true);
}

// =============================================================================
// POST /horoscope
// =============================================================================

#[tokio::test]
async fn horoscope_success_echoes_birth_details() {
    let llm = Arc::new(MockLlm::replying("TRAITS: Bold, Warm\nFORECAST: A strong year ahead."));
    let state = test_helpers::test_app_state_with_llm(llm);
    let (status, body) = send(app(state), "POST", "/horoscope", Some(leo_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zodiacSign"], "Leo");
    assert_eq!(body["element"], "Fire");
    assert_eq!(body["personalityTraits"], json!(["Bold", "Warm"]));
    assert_eq!(body["predictions"], "A strong year ahead.");
    assert_eq!(body["birthDetails"], leo_body());
}

#[tokio::test]
async fn horoscope_without_llm_still_succeeds() {
    let (status, body) = send(app(test_helpers::test_app_state()), "POST", "/horoscope", Some(leo_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalityTraits"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn horoscope_missing_field_is_named() {
    let mut body = leo_body();
    body.as_object_mut().unwrap().remove("timeOfBirth");
    let (status, body) = send(app(test_helpers::test_app_state()), "POST", "/horoscope", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: timeOfBirth");
}

#[tokio::test]
async fn horoscope_invalid_date_is_bad_request() {
    let mut body = leo_body();
    body["dateOfBirth"] = json!("1st of August");
    let (status, body) = send(app(test_helpers::test_app_state()), "POST", "/horoscope", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date format. Use YYYY-MM-DD");
}

#[tokio::test]
async fn horoscope_non_object_body_is_bad_request() {
    let (status, body) = send(app(test_helpers::test_app_state()), "POST", "/horoscope", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Request body must be a JSON object");
}

#[tokio::test]
async fn horoscope_malformed_json_still_returns_error_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/horoscope")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(test_helpers::test_app_state())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

// =============================================================================
// POST /ask
// =============================================================================

#[tokio::test]
async fn ask_success_returns_answer() {
    let llm = Arc::new(MockLlm::replying("Yes, love is near."));
    let state = test_helpers::test_app_state_with_llm(llm);
    let payload = json!({ "question": "Love?", "birthDetails": leo_body() });
    let (status, body) = send(app(state), "POST", "/ask", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Yes, love is near.");
    assert_eq!(body["zodiacSign"], "Leo");
    assert_eq!(body["question"], "Love?");
}

#[tokio::test]
async fn ask_validation_order() {
    let state = test_helpers::test_app_state();

    let (status, body) = send(app(state.clone()), "POST", "/ask", Some(json!({ "birthDetails": leo_body() }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: question");

    let (_, body) = send(app(state.clone()), "POST", "/ask", Some(json!({ "question": "Love?" }))).await;
    assert_eq!(body["error"], "Missing required field: birthDetails");

    let payload = json!({ "question": "Love?", "birthDetails": { "name": "Ada" } });
    let (_, body) = send(app(state), "POST", "/ask", Some(payload)).await;
    assert_eq!(body["error"], "Missing required birth detail: dateOfBirth");
}

#[tokio::test]
async fn ask_without_llm_is_server_error() {
    let payload = json!({ "question": "Love?", "birthDetails": leo_body() });
    let (status, body) = send(app(test_helpers::test_app_state()), "POST", "/ask", Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI model not available. Please check API key configuration.");
}

#[tokio::test]
async fn ask_with_empty_llm_reply_is_server_error() {
    let llm = Arc::new(MockLlm::replying(""));
    let state = test_helpers::test_app_state_with_llm(llm);
    let payload = json!({ "question": "Love?", "birthDetails": leo_body() });
    let (status, body) = send(app(state), "POST", "/ask", Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("AI service error:")));
    assert!(body.get("answer").is_none());
}

#[tokio::test]
async fn horoscope_with_empty_llm_reply_uses_canned_profile() {
    let llm = Arc::new(MockLlm::failing(crate::llm::types::LlmError::EmptyReply { finish_reason: "MAX_TOKENS".into() }));
    let state = test_helpers::test_app_state_with_llm(llm);
    let (status, body) = send(app(state), "POST", "/horoscope", Some(leo_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zodiacSign"], "Leo");
    assert_eq!(body["personalityTraits"].as_array().map(Vec::len), Some(5));
}
