//! Background worker for the network round trip.
//!
//! The scoring call runs on its own thread so the UI loop keeps drawing
//! while the request is in flight. Results come back over a channel; if the
//! receiving side has been dropped (form reset or torn down), the settlement
//! is discarded.

use std::sync::mpsc::{self, Receiver, RecvError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::{PredictionRequest, PredictionResult, SubmissionError};
use crate::ports::RiskScoringService;

/// Settlement of one submission.
#[derive(Debug, Clone)]
pub enum SubmissionProgress {
    /// The service returned an assessment
    Complete(PredictionResult),
    /// The request failed
    Error(SubmissionError),
}

/// Handle to a running submission worker.
pub struct SubmissionWorkerHandle {
    progress_rx: Receiver<SubmissionProgress>,
    _handle: JoinHandle<()>,
}

impl SubmissionWorkerHandle {
    /// Non-blocking check for the settlement.
    ///
    /// # Errors
    /// `Empty` while the request is in flight, `Disconnected` if the worker
    /// exited without reporting.
    pub fn try_recv(&self) -> Result<SubmissionProgress, TryRecvError> {
        self.progress_rx.try_recv()
    }

    /// Block until the worker settles.
    ///
    /// # Errors
    /// Returns `RecvError` if the worker exited without reporting.
    pub fn recv(&self) -> Result<SubmissionProgress, RecvError> {
        self.progress_rx.recv()
    }
}

/// Runs one prediction request off the UI thread.
pub struct SubmissionWorker;

impl SubmissionWorker {
    /// Spawn the request.
    ///
    /// A success is held back until `min_loading` has elapsed since
    /// `started_at`, so the submitting state is always perceivable. Errors
    /// are reported immediately.
    pub fn spawn<S>(
        service: Arc<S>,
        request: PredictionRequest,
        started_at: Instant,
        min_loading: Duration,
    ) -> SubmissionWorkerHandle
    where
        S: RiskScoringService + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run(service.as_ref(), &request, started_at, min_loading, tx);
        });

        SubmissionWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run<S>(
        service: &S,
        request: &PredictionRequest,
        started_at: Instant,
        min_loading: Duration,
        tx: Sender<SubmissionProgress>,
    ) where
        S: RiskScoringService + ?Sized,
    {
        tracing::debug!(endpoint = service.endpoint(), "Sending prediction request");

        let progress = match service.predict(request) {
            Ok(result) => {
                let remaining = min_loading.saturating_sub(started_at.elapsed());
                if !remaining.is_zero() {
                    thread::sleep(remaining);
                }
                SubmissionProgress::Complete(result)
            }
            Err(e) => SubmissionProgress::Error(e),
        };

        if tx.send(progress).is_err() {
            tracing::debug!("Submission abandoned before it settled; result discarded");
        }
    }
}

/// Probe the service once in the background.
///
/// The receiver yields a single value: the greeting, or why the probe failed.
pub fn spawn_health_probe<S>(service: Arc<S>) -> Receiver<Result<String, SubmissionError>>
where
    S: RiskScoringService + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(service.health());
    });
    rx
}
