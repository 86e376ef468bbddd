//! Submission orchestrator: owns the submission state machine.
//!
//! ```text
//!   Idle ──submit(valid)──▶ Submitting ──settle──▶ Success | Error
//!    ▲        │                                      │
//!    │   submit(invalid) ──▶ Error                   │
//!    └──────── reset / dismiss_error ◀───────────────┘
//! ```
//!
//! At most one request is in flight. A `submit` while `Submitting` is
//! ignored. `reset` abandons the in-flight worker; its late settlement is
//! dropped with the channel and never reaches the state.

use std::sync::mpsc::TryRecvError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::{
    PredictionRequest, RawFormInput, SubmissionError, SubmissionState, ValidationFailure,
};
use crate::ports::RiskScoringService;

use super::worker::{SubmissionProgress, SubmissionWorker, SubmissionWorkerHandle};

/// What a call to `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and a request is in flight.
    Started,
    /// Validation failed; no request was sent.
    Rejected(ValidationFailure),
    /// A request was already in flight; nothing changed.
    Ignored,
}

/// Coordinates validation, the network call and settlement for one form.
pub struct SubmissionOrchestrator<S>
where
    S: RiskScoringService + 'static,
{
    service: Arc<S>,
    min_loading: Duration,
    state: SubmissionState,
    pending: Option<SubmissionWorkerHandle>,
    attempts: u64,
}

impl<S> SubmissionOrchestrator<S>
where
    S: RiskScoringService + 'static,
{
    /// Create an orchestrator in the `Idle` state.
    ///
    /// `min_loading` is the floor on how long `Submitting` stays visible
    /// before a success is exposed; `Duration::ZERO` disables it.
    pub fn new(service: Arc<S>, min_loading: Duration) -> Self {
        Self {
            service,
            min_loading,
            state: SubmissionState::Idle,
            pending: None,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Validate `raw` and, if it passes, start one request.
    pub fn submit(&mut self, raw: &RawFormInput) -> SubmitOutcome {
        if self.pending.is_some() {
            tracing::info!("Submission already in flight; ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let validated = match raw.validate() {
            Ok(v) => v,
            Err(failure) => {
                tracing::info!(reason = failure.code(), "Submission rejected by validation");
                self.transition(SubmissionState::from_error(&SubmissionError::Validation(
                    failure,
                )));
                return SubmitOutcome::Rejected(failure);
            }
        };

        let started_at = Instant::now();
        self.transition(SubmissionState::Submitting { started_at });
        self.attempts += 1;

        let request = PredictionRequest::from(&validated);
        tracing::info!(
            attempt = self.attempts,
            endpoint = self.service.endpoint(),
            "Submitting prediction request"
        );

        self.pending = Some(SubmissionWorker::spawn(
            Arc::clone(&self.service),
            request,
            started_at,
            self.min_loading,
        ));

        SubmitOutcome::Started
    }

    /// Apply the settlement if the worker has reported. Never blocks.
    ///
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let received = match self.pending.as_ref() {
            Some(worker) => worker.try_recv(),
            None => return false,
        };

        match received {
            Ok(progress) => {
                self.settle(progress);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.settle(lost_worker());
                true
            }
        }
    }

    /// Block until the in-flight request settles, then return the state.
    ///
    /// Returns immediately when nothing is in flight.
    pub fn wait(&mut self) -> &SubmissionState {
        let received = self.pending.as_ref().map(|worker| worker.recv());
        if let Some(received) = received {
            self.settle(received.unwrap_or_else(|_| lost_worker()));
        }
        &self.state
    }

    /// Abandon any in-flight request and return to `Idle`.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            tracing::info!(attempt = self.attempts, "Abandoning in-flight submission");
        }
        self.transition(SubmissionState::Idle);
    }

    /// Clear a shown error (`Error` → `Idle`). Other states are untouched.
    ///
    /// Returns `true` when an error was cleared.
    pub fn dismiss_error(&mut self) -> bool {
        if matches!(self.state, SubmissionState::Error { .. }) {
            self.transition(SubmissionState::Idle);
            true
        } else {
            false
        }
    }

    fn settle(&mut self, progress: SubmissionProgress) {
        self.pending = None;

        let next = match progress {
            SubmissionProgress::Complete(result) => {
                tracing::info!(
                    attempt = self.attempts,
                    high_risk = result.is_high_risk(),
                    "Prediction received"
                );
                SubmissionState::Success {
                    result,
                    settled_at: chrono::Utc::now(),
                }
            }
            SubmissionProgress::Error(error) => {
                tracing::warn!(
                    attempt = self.attempts,
                    kind = %error.kind(),
                    error = %error,
                    "Prediction failed"
                );
                SubmissionState::from_error(&error)
            }
        };
        self.transition(next);
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(
            from = self.state.name(),
            to = next.name(),
            "Submission state changed"
        );
        self.state = next;
    }
}

fn lost_worker() -> SubmissionProgress {
    SubmissionProgress::Error(SubmissionError::Transport(
        "submission worker exited without a result".to_string(),
    ))
}
