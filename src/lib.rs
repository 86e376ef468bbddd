//! # CardioCare
//!
//! Terminal client for cardiovascular risk assessment.
//!
//! This crate provides:
//! - A typed vitals form with all-or-nothing validation
//! - A submission pipeline that converts vitals into the scoring service's
//!   wire format, calls it once, and tracks the outcome as a state machine
//! - Display rules for the returned assessment
//! - Terminal UI hosting the form
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (form input, wire contract, submission state)
//! - `ports`: Trait for the remote scoring service
//! - `adapters`: Concrete implementations (HTTP client, log sanitizer)
//! - `application`: Collector, orchestrator and background worker
//! - `config`: Environment-driven settings
//! - `tui`: Terminal user interface
//!
//! Nothing is persisted. Vitals live in memory for the lifetime of the form
//! and numeric buffers are wiped when the form is cleared.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{PredictionResult, RawFormInput, RiskPolarity, SubmissionState};

/// Result type for CardioCare operations
pub type Result<T> = std::result::Result<T, CardiocareError>;

/// Main error type for CardioCare
#[derive(Debug, thiserror::Error)]
pub enum CardiocareError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
