//! Domain layer: Core types and rules.
//!
//! Pure Rust types with no I/O. Form values, the wire contract with the
//! scoring service and the submission lifecycle live here.

mod prediction;
mod submission;
mod vitals;

pub use prediction::{
    age_years_to_days, PredictionRequest, PredictionResponse, PredictionResult,
    ResponseShapeError, RiskPolarity, BMI_NORMAL_RANGE, DAYS_PER_YEAR, RESULT_DISCLAIMER,
};
pub use submission::{
    ErrorKind, SubmissionError, SubmissionState, SERVICE_ERROR_MESSAGE, TRANSPORT_ERROR_MESSAGE,
};
pub use vitals::{
    Field, FieldUpdate, Gender, RawFormInput, ValidatedInput, ValidationFailure, YesNo,
    MAX_AGE_YEARS, MIN_AGE_YEARS,
};
