//! AI Astrologer: an HTTP backend that derives a zodiac profile from birth
//! details and answers follow-up questions through an LLM, plus the form
//! client that drives it.

pub mod client;
pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
pub mod zodiac;
