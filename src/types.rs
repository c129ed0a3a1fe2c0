//! Wire types shared by the HTTP server and the form client.
//!
//! Field names follow the JSON the browser form has always sent:
//! camelCase keys (`dateOfBirth`, `personalityTraits`, ...).

use serde::{Deserialize, Serialize};

// =============================================================================
// BIRTH DETAILS
// =============================================================================

/// The four-field record describing a person's birth.
///
/// No format validation happens on the client; the server parses
/// `date_of_birth` as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
}

impl BirthDetails {
    /// `true` when every field holds a non-empty value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.date_of_birth.is_empty()
            && !self.time_of_birth.is_empty()
            && !self.place_of_birth.is_empty()
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Result of `POST /horoscope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResult {
    pub zodiac_sign: String,
    pub element: String,
    pub personality_traits: Vec<String>,
    pub predictions: String,
    /// Echo of the submitted details. Older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_details: Option<BirthDetails>,
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub question: String,
    pub birth_details: BirthDetails,
}

/// Result of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnswer {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Failure body returned by every endpoint with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
