//! Lifecycle of one prediction submission.

use std::time::Instant;

use super::prediction::PredictionResult;
use super::vitals::ValidationFailure;

/// Shown when the request never produced a response.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the service answered with a failure and gave no detail.
pub const SERVICE_ERROR_MESSAGE: &str = "Failed to get prediction";

/// Which step of the pipeline produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local input check failed; nothing was sent.
    Validation,
    /// The request did not complete (connect failure, I/O, timeout).
    Transport,
    /// A response arrived but its status or body indicated failure.
    Service,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation_error"),
            Self::Transport => write!(f, "transport_error"),
            Self::Service => write!(f, "service_error"),
        }
    }
}

/// Failure of a submission attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("transport failed: {0}")]
    Transport(String),

    #[error("service failed (status {status:?}): {reason}")]
    Service {
        status: Option<u16>,
        /// Message supplied by the service, surfaced verbatim when present.
        detail: Option<String>,
        /// Internal description for logs.
        reason: String,
    },
}

impl SubmissionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Service { .. } => ErrorKind::Service,
        }
    }

    /// Text shown to the user. Never contains transport internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(failure) => failure.to_string(),
            Self::Transport(_) => TRANSPORT_ERROR_MESSAGE.to_string(),
            Self::Service {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::Service { .. } => SERVICE_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Observable state of the form's submission pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet, or the last outcome was dismissed.
    #[default]
    Idle,
    /// One request in flight.
    Submitting { started_at: Instant },
    /// The service returned an assessment.
    Success {
        result: PredictionResult,
        settled_at: chrono::DateTime<chrono::Utc>,
    },
    /// The attempt failed at one of the pipeline steps.
    Error { kind: ErrorKind, message: String },
}

impl SubmissionState {
    #[must_use]
    pub fn from_error(error: &SubmissionError) -> Self {
        Self::Error {
            kind: error.kind(),
            message: error.user_message(),
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting { .. } => "submitting",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
