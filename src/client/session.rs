//! Form session — the state behind the birth-details page.
//!
//! DESIGN
//! ======
//! Each flow (horoscope, AI question) runs `Idle → Busy → Settled` and the
//! lifecycle is an explicit [`FlowStatus`] per flow rather than a bare
//! boolean. Busy is only entered after the flow's preconditions pass.
//!
//! A flow is split into `begin_*` (validate, enter Busy, hand back the
//! request payload) and `finish_*` (apply the outcome, leave Busy). An event
//! loop can render between the two halves; `generate_horoscope` and
//! `ask_ai_question` compose them around an [`AstrologerApi`] call.
//!
//! Both flows share one visible error slot. The slot records which flow
//! wrote it; the last writer wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::debug;

use super::api::{ApiError, AstrologerApi};
use super::form::BirthForm;
use crate::types::{AiAnswer, AskRequest, BirthDetails, HoroscopeResult};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const ENTER_QUESTION: &str = "Please enter a question";
pub const HOROSCOPE_FIRST: &str = "Please generate your horoscope first";
pub const HOROSCOPE_FALLBACK: &str = "Failed to generate horoscope";
pub const ASK_FALLBACK: &str = "Failed to get AI response";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Horoscope,
    Ask,
}

impl Flow {
    /// Message shown when a request fails without a server-supplied reason.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Horoscope => HOROSCOPE_FALLBACK,
            Self::Ask => ASK_FALLBACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Lifecycle of one flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    Busy,
    Settled(Outcome),
}

impl FlowStatus {
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// The visible error plus the flow that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowError {
    pub flow: Flow,
    pub message: String,
}

/// Transient page state. Nothing here outlives the session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub form: BirthForm,
    question: String,
    horoscope: Option<HoroscopeResult>,
    answer: Option<AiAnswer>,
    error: Option<FlowError>,
    horoscope_status: FlowStatus,
    ask_status: FlowStatus,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn horoscope(&self) -> Option<&HoroscopeResult> {
        self.horoscope.as_ref()
    }

    #[must_use]
    pub fn answer(&self) -> Option<&AiAnswer> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn status(&self, flow: Flow) -> FlowStatus {
        match flow {
            Flow::Horoscope => self.horoscope_status,
            Flow::Ask => self.ask_status,
        }
    }

    #[must_use]
    pub fn is_busy(&self, flow: Flow) -> bool {
        self.status(flow).is_busy()
    }

    /// The question section is offered once a horoscope exists.
    #[must_use]
    pub fn question_enabled(&self) -> bool {
        self.horoscope.is_some()
    }

    fn fail(&mut self, flow: Flow, message: impl Into<String>) {
        self.error = Some(FlowError { flow, message: message.into() });
    }

    // =========================================================================
    // HOROSCOPE FLOW
    // =========================================================================

    /// Validate the form and enter Busy. Returns the payload to send, or
    /// `None` when no request should be issued: the flow is already Busy
    /// (trigger disabled), or a field is empty (error set).
    pub fn begin_horoscope(&mut self) -> Option<BirthDetails> {
        if self.horoscope_status.is_busy() {
            return None;
        }
        if !self.form.is_complete() {
            self.fail(Flow::Horoscope, FILL_ALL_FIELDS);
            return None;
        }
        self.horoscope_status = FlowStatus::Busy;
        self.error = None;
        Some(self.form.details().clone())
    }

    /// Apply the horoscope response and leave Busy. Ignored when the flow
    /// is not Busy.
    pub fn finish_horoscope(&mut self, result: Result<HoroscopeResult, ApiError>) -> Option<Outcome> {
        if !self.horoscope_status.is_busy() {
            debug!("session: stray horoscope completion ignored");
            return None;
        }
        let outcome = match result {
            Ok(horoscope) => {
                self.horoscope = Some(horoscope);
                self.error = None;
                Outcome::Success
            }
            Err(err) => {
                debug!(error = %err, "session: horoscope request failed");
                self.fail(Flow::Horoscope, err.user_message(Flow::Horoscope.fallback_message()));
                self.horoscope = None;
                Outcome::Failure
            }
        };
        self.horoscope_status = FlowStatus::Settled(outcome);
        Some(outcome)
    }

    /// Run the whole horoscope flow against `api`.
    ///
    /// Returns `None` when no request was issued.
    pub async fn generate_horoscope(&mut self, api: &dyn AstrologerApi) -> Option<Outcome> {
        let details = self.begin_horoscope()?;
        let result = api.horoscope(&details).await;
        self.finish_horoscope(result)
    }

    // =========================================================================
    // AI QUESTION FLOW
    // =========================================================================

    /// Validate the question and enter Busy.
    ///
    /// The empty-question check runs before the horoscope-exists check, so
    /// an empty question always reports [`ENTER_QUESTION`].
    pub fn begin_ask(&mut self) -> Option<AskRequest> {
        if self.ask_status.is_busy() {
            return None;
        }
        if self.question.trim().is_empty() {
            self.fail(Flow::Ask, ENTER_QUESTION);
            return None;
        }
        if self.horoscope.is_none() {
            self.fail(Flow::Ask, HOROSCOPE_FIRST);
            return None;
        }
        self.ask_status = FlowStatus::Busy;
        self.error = None;
        Some(AskRequest { question: self.question.clone(), birth_details: self.form.details().clone() })
    }

    /// Apply the answer and leave Busy. Ignored when the flow is not Busy.
    pub fn finish_ask(&mut self, result: Result<AiAnswer, ApiError>) -> Option<Outcome> {
        if !self.ask_status.is_busy() {
            debug!("session: stray ask completion ignored");
            return None;
        }
        let outcome = match result {
            Ok(answer) => {
                self.answer = Some(answer);
                self.error = None;
                Outcome::Success
            }
            Err(err) => {
                debug!(error = %err, "session: ask request failed");
                self.fail(Flow::Ask, err.user_message(Flow::Ask.fallback_message()));
                self.answer = None;
                Outcome::Failure
            }
        };
        self.ask_status = FlowStatus::Settled(outcome);
        Some(outcome)
    }

    /// Run the whole question flow against `api`.
    ///
    /// Returns `None` when no request was issued.
    pub async fn ask_ai_question(&mut self, api: &dyn AstrologerApi) -> Option<Outcome> {
        let request = self.begin_ask()?;
        let result = api.ask(&request).await;
        self.finish_ask(result)
    }
}
