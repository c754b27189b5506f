use std::fmt::Debug;

use reqwest::StatusCode;
use serde_json::Value;

use crate::utils::error_chain_fmt;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Everything that can go wrong between pressing "Join" and hearing back from
/// the waitlist API. The `Display` string is what the user gets to read.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    /// The API already holds this email. Shown inline in the modal.
    #[error("{0}")]
    DuplicateEmail(String),

    /// Any other non-2xx answer. Shown as a toast.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// No answer at all (connection refused, timeout, garbled body). Shown as a
    /// toast.
    #[error("Network error. Please try again.")]
    Network(#[source] reqwest::Error),

    /// The form did not parse into a `WaitlistEntry`.
    #[error("{0}")]
    Invalid(String),

    #[error("A submission is already in progress.")]
    InFlight,
}

impl Debug for SubmissionError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubmissionError {
    /// Classify a non-2xx response from the API.
    pub fn from_response(
        status: StatusCode,
        body: &[u8],
    ) -> Self {
        let message = error_message(status, body);
        match is_duplicate_email(&message) {
            true => Self::DuplicateEmail(message),
            false => Self::Rejected { status, message },
        }
    }

    pub fn user_message(&self) -> String { self.to_string() }
}

/// Dig a human readable message out of an error payload. Falls back to the
/// status' canonical reason ("Internal Server Error"), then to a generic
/// message.
pub fn error_message(
    status: StatusCode,
    body: &[u8],
) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(message_in_payload)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

// the API has answered with (at least) all of these shapes at some point:
//
// {"message": "..."}
// {"error": "..."}
// {"error": {"message": "..."}}
// {"errors": [{"message": "..."}]} / {"errors": ["..."]}
// {"data": {"message": "..."}}
fn message_in_payload(payload: &Value) -> Option<String> {
    let non_empty = |v: &Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    [
        payload.get("message"),
        payload.get("error"),
        payload.pointer("/error/message"),
        payload.pointer("/errors/0/message"),
        payload.pointer("/errors/0"),
        payload.pointer("/data/message"),
    ]
    .into_iter()
    .flatten()
    .find_map(non_empty)
}

/// The API doesn't hand out error codes, so the only way to tell a duplicate
/// from any other rejection is the wording: "User with this email already
/// exists", "Email exists", etc.
pub fn is_duplicate_email(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("email") && message.contains("exist")
}
