//! `/horoscope` and `/ask` handlers.
//!
//! Bodies are extracted as raw JSON so that a missing field can be reported
//! by name, in the order the form declares them, instead of as a generic
//! deserialization failure.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Map, Value};

use crate::services::ask::{self, AskError};
use crate::services::horoscope::{self, HoroscopeError};
use crate::services::SignError;
use crate::state::AppState;
use crate::types::{AiAnswer, BirthDetails, ErrorBody, HoroscopeResult};

/// Error half of every handler: status plus `{"error": ...}` body.
pub type ApiFailure = (StatusCode, Json<ErrorBody>);

const BIRTH_FIELDS: [&str; 4] = ["name", "dateOfBirth", "timeOfBirth", "placeOfBirth"];

fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (status, Json(ErrorBody::new(message)))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /horoscope` — birth details in, horoscope out.
pub async fn generate_horoscope(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HoroscopeResult>, ApiFailure> {
    let body = json_object(body)?;
    let details = birth_details(&body, "Missing required field")?;

    horoscope::generate(&state, &details)
        .await
        .map(Json)
        .map_err(horoscope_error_to_failure)
}

/// `POST /ask` — question plus birth details in, short answer out.
pub async fn ask_question(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AiAnswer>, ApiFailure> {
    let body = json_object(body)?;

    let question = required_str(&body, "question", "Missing required field")?;
    let Some(Value::Object(birth)) = body.get("birthDetails") else {
        return Err(failure(StatusCode::BAD_REQUEST, "Missing required field: birthDetails"));
    };
    let details = birth_details(birth, "Missing required birth detail")?;

    ask::answer(&state, &question, &details)
        .await
        .map(Json)
        .map_err(ask_error_to_failure)
}

// =============================================================================
// EXTRACTION
// =============================================================================

fn json_object(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiFailure> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(failure(StatusCode::BAD_REQUEST, "Request body must be a JSON object")),
        Err(rejection) => Err(failure(StatusCode::BAD_REQUEST, rejection.body_text())),
    }
}

/// Pull a string field. Absent and `null` both count as missing; empty
/// strings are accepted.
fn required_str(obj: &Map<String, Value>, field: &str, missing: &str) -> Result<String, ApiFailure> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(failure(StatusCode::BAD_REQUEST, format!("{missing}: {field}"))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(failure(StatusCode::BAD_REQUEST, format!("Field must be a string: {field}"))),
    }
}

fn birth_details(obj: &Map<String, Value>, missing: &str) -> Result<BirthDetails, ApiFailure> {
    let [name, date_of_birth, time_of_birth, place_of_birth] = BIRTH_FIELDS;
    Ok(BirthDetails {
        name: required_str(obj, name, missing)?,
        date_of_birth: required_str(obj, date_of_birth, missing)?,
        time_of_birth: required_str(obj, time_of_birth, missing)?,
        place_of_birth: required_str(obj, place_of_birth, missing)?,
    })
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn horoscope_error_to_failure(err: HoroscopeError) -> ApiFailure {
    match err {
        HoroscopeError::Sign(e) => sign_error_to_failure(&e),
    }
}

pub(crate) fn ask_error_to_failure(err: AskError) -> ApiFailure {
    match err {
        AskError::Sign(e) => sign_error_to_failure(&e),
        AskError::LlmNotConfigured | AskError::Llm(_) => failure(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn sign_error_to_failure(err: &SignError) -> ApiFailure {
    failure(StatusCode::BAD_REQUEST, err.to_string())
}

#[cfg(test)]
#[path = "astrology_test.rs"]
mod tests;
