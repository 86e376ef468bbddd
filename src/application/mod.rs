//! Application layer: Use cases and services.
//!
//! This module wires domain rules to the scoring port: collecting input,
//! running one submission at a time in the background, and exposing the
//! resulting state to the UI.

mod collector;
mod form;
mod submission;
mod worker;

pub use collector::InputCollector;
pub use form::PredictionForm;
pub use submission::{SubmissionOrchestrator, SubmitOutcome};
pub use worker::{spawn_health_probe, SubmissionProgress, SubmissionWorker, SubmissionWorkerHandle};
