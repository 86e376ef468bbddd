//! HTTP adapter for the remote risk scoring service.
//!
//! Sends `POST {base}/predict` with a JSON body and parses the JSON answer
//! strictly. Uses the blocking `reqwest` client; calls run on the submission
//! worker thread, never on the UI loop.

use serde::Deserialize;

use crate::domain::{PredictionRequest, PredictionResponse, PredictionResult, SubmissionError};
use crate::ports::RiskScoringService;
use crate::CardiocareError;

/// Scoring service reached over HTTP.
pub struct HttpRiskService {
    base_url: String,
    predict_url: String,
    client: reqwest::blocking::Client,
}

/// Error body shape used by the service (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Greeting returned by `GET /`.
#[derive(Deserialize)]
struct HealthBody {
    message: String,
}

impl HttpRiskService {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// No timeout is configured beyond the transport default.
    ///
    /// # Errors
    /// Returns `CardiocareError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CardiocareError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("cardiocare/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            predict_url: format!("{}/predict", base_url),
            base_url,
            client,
        })
    }

    fn transport_error(&self, e: &reqwest::Error) -> SubmissionError {
        if e.is_connect() {
            SubmissionError::Transport(format!("cannot connect to {}", self.base_url))
        } else if e.is_timeout() {
            SubmissionError::Transport("request timed out".to_string())
        } else {
            SubmissionError::Transport(e.to_string())
        }
    }
}

/// Pull a human-readable message out of a failure body, if it carries one.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

impl RiskScoringService for HttpRiskService {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmissionError> {
        let response = self
            .client
            .post(&self.predict_url)
            .json(request)
            .send()
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SubmissionError::Service {
                status: Some(status.as_u16()),
                detail: extract_detail(&body),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        // The response arrived, so a broken body is the service's failure.
        let body = response.text().map_err(|e| SubmissionError::Service {
            status: Some(status.as_u16()),
            detail: None,
            reason: format!("unreadable response body: {}", e),
        })?;
        let parsed: PredictionResponse =
            serde_json::from_str(&body).map_err(|e| SubmissionError::Service {
                status: Some(status.as_u16()),
                detail: None,
                reason: format!("malformed response body: {}", e),
            })?;

        PredictionResult::try_from(parsed).map_err(|e| SubmissionError::Service {
            status: Some(status.as_u16()),
            detail: None,
            reason: format!("unexpected response shape: {}", e),
        })
    }

    fn health(&self) -> Result<String, SubmissionError> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Service {
                status: Some(status.as_u16()),
                detail: None,
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().map_err(|e| SubmissionError::Service {
            status: Some(status.as_u16()),
            detail: None,
            reason: format!("unreadable response body: {}", e),
        })?;
        Ok(serde_json::from_str::<HealthBody>(&body)
            .map(|h| h.message)
            .unwrap_or(body))
    }

    fn endpoint(&self) -> &str {
        &self.predict_url
    }
}
