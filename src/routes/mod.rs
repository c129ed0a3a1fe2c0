//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser form (or the `astro` terminal client) talks to two JSON
//! endpoints, `/horoscope` and `/ask`. `/` and `/health` are informational.
//! Every failure response carries an `{"error": "..."}` body so clients can
//! surface the message verbatim.

pub mod astrology;

use axum::Router;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/horoscope", post(astrology::generate_horoscope))
        .route("/ask", post(astrology::ask_question))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /` — API description.
async fn index() -> Json<Value> {
    Json(json!({
        "message": "AI Astrologer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/horoscope": "POST - Generate horoscope based on birth details",
            "/ask": "POST - Ask custom astrology questions using AI"
        }
    }))
}

/// `GET /health` — liveness plus whether AI answers are available.
async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> Json<Value> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp,
        "ai_model_available": state.ai_available(),
    }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
