//! Unified error type for clinic API calls.
//!
//! The portal historically grew three different failure styles per call
//! site (silent empty results, user alerts, raw status passthrough).
//! Everything now funnels through [`UpstreamError`] so controllers handle
//! failures the same way everywhere: log it, then render a placeholder or
//! an inline banner.

use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced an HTTP response (DNS, refused
    /// connection, timeout).
    #[error("clinic API is unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success status. `message` carries
    /// the `message`/`error` field of the response body when one was
    /// present, otherwise the status' canonical reason.
    #[error("clinic API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response from clinic API: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Error bodies come back as either `{"error": "..."}` or
/// `{"message": "..."}` depending on the upstream endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl UpstreamError {
    /// Build a `Status` error from a non-success response, pulling the
    /// human-readable message out of the body when there is one.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// The server-supplied message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// The server-supplied message, or `default` for failures that never
    /// reached the upstream (or whose body said nothing useful).
    pub fn message_or(&self, default: &str) -> String {
        self.server_message().unwrap_or(default).to_string()
    }
}
