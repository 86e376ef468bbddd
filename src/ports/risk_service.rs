//! Risk scoring port: Trait for the remote prediction service.
//!
//! This trait keeps the HTTP client out of the application logic so the
//! orchestrator can be driven by a stub in tests.

use crate::domain::{PredictionRequest, PredictionResult, SubmissionError};

/// Trait for risk scoring operations.
///
/// Implementations provide:
/// - One prediction round trip per call (no retries)
/// - A cheap reachability probe
pub trait RiskScoringService: Send + Sync {
    /// Submit a prediction request and parse the assessment.
    ///
    /// # Errors
    /// Returns `SubmissionError::Transport` if no response was received.
    /// Returns `SubmissionError::Service` on a non-success status or a body
    /// that does not match the result contract.
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmissionError>;

    /// Check that the service answers.
    ///
    /// Returns the service greeting on success.
    ///
    /// # Errors
    /// Same classification as [`predict`](Self::predict).
    fn health(&self) -> Result<String, SubmissionError>;

    /// Where requests go, for display and logs.
    fn endpoint(&self) -> &str;
}
