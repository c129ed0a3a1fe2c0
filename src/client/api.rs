//! Transport between the form and the astrologer backend.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] instead of panics. The session turns
//! them into display text with [`ApiError::user_message`]: a server-supplied
//! `error` string is shown verbatim, anything else becomes the flow's
//! generic fallback.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::{AiAnswer, AskRequest, BirthDetails, ErrorBody, HoroscopeResult};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status. `message` is the body's `error` field when the
    /// body parsed and the field was non-empty.
    #[error("server returned HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Server { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// The server's own message, if it sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to display for this failure.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// The two backend calls the form makes.
#[async_trait::async_trait]
pub trait AstrologerApi: Send + Sync {
    /// `POST /horoscope`.
    async fn horoscope(&self, details: &BirthDetails) -> Result<HoroscopeResult, ApiError>;

    /// `POST /ask`.
    async fn ask(&self, request: &AskRequest) -> Result<AiAnswer, ApiError>;
}

// =============================================================================
// HTTP TRANSPORT
// =============================================================================

/// reqwest-backed [`AstrologerApi`]. No client-side timeout: a request runs
/// until the server answers or the connection fails.
#[derive(Clone, Debug)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, base_url: base_url.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`, returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// non-JSON body.
    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "api: POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Server { status: status.as_u16(), message: error_message(&text) });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull a non-empty `error` string out of a failure body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty())
}

#[async_trait::async_trait]
impl AstrologerApi for HttpApi {
    async fn horoscope(&self, details: &BirthDetails) -> Result<HoroscopeResult, ApiError> {
        self.post_json("/horoscope", details).await
    }

    async fn ask(&self, request: &AskRequest) -> Result<AiAnswer, ApiError> {
        self.post_json("/ask", request).await
    }
}
