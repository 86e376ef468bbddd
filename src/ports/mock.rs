//! In-memory scoring service for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use super::RiskScoringService;
use crate::domain::{
    PredictionRequest, PredictionResponse, PredictionResult, SubmissionError,
};

/// Replays queued outcomes and records every request it sees.
///
/// When built with [`MockRiskService::gated`], each call blocks until the
/// test releases it through the returned sender.
pub struct MockRiskService {
    outcomes: Mutex<VecDeque<Result<PredictionResult, SubmissionError>>>,
    requests: Mutex<Vec<PredictionRequest>>,
    calls: AtomicUsize,
    gate: Option<Mutex<Receiver<()>>>,
}

impl MockRiskService {
    pub fn new(outcomes: Vec<Result<PredictionResult, SubmissionError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(outcomes: Vec<Result<PredictionResult, SubmissionError>>) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let mut service = Self::new(outcomes);
        service.gate = Some(Mutex::new(rx));
        (service, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

/// A canned assessment.
pub fn result(prediction: i64, probability: f64, bmi: f64) -> PredictionResult {
    PredictionResult::try_from(PredictionResponse {
        prediction,
        probability,
        risk_label: if prediction == 1 { "High Risk" } else { "Low Risk" }.to_string(),
        bmi,
    })
    .expect("valid canned result")
}

impl RiskScoringService for MockRiskService {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        if let Some(gate) = &self.gate {
            let _ = gate.lock().expect("gate lock").recv();
        }

        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or_else(|| Err(SubmissionError::Transport("no canned outcome".into())))
    }

    fn health(&self) -> Result<String, SubmissionError> {
        Ok("mock".to_string())
    }

    fn endpoint(&self) -> &str {
        "mock://predict"
    }
}
