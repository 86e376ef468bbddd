//! One prediction form: a collector wired to an orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Field, FieldUpdate, RawFormInput, SubmissionState};
use crate::ports::RiskScoringService;

use super::collector::InputCollector;
use super::submission::{SubmissionOrchestrator, SubmitOutcome};

/// The unit the UI talks to.
///
/// Every edit goes through [`update_field`](Self::update_field), which also
/// clears a shown error so the user can correct input before resubmitting.
pub struct PredictionForm<S>
where
    S: RiskScoringService + 'static,
{
    collector: InputCollector,
    orchestrator: SubmissionOrchestrator<S>,
}

impl<S> PredictionForm<S>
where
    S: RiskScoringService + 'static,
{
    pub fn new(service: Arc<S>, min_loading: Duration) -> Self {
        Self {
            collector: InputCollector::new(),
            orchestrator: SubmissionOrchestrator::new(service, min_loading),
        }
    }

    #[must_use]
    pub fn raw(&self) -> &RawFormInput {
        self.collector.raw()
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        self.orchestrator.state()
    }

    #[must_use]
    pub fn orchestrator(&self) -> &SubmissionOrchestrator<S> {
        &self.orchestrator
    }

    /// Replace one field and clear any shown error.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.collector.update_field(update);
        self.orchestrator.dismiss_error();
    }

    /// Type a character into `field`. Returns whether anything changed.
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        let update = self.collector.push_char(field, c);
        self.apply(update)
    }

    pub fn pop_char(&mut self, field: Field) -> bool {
        let update = self.collector.pop_char(field);
        self.apply(update)
    }

    pub fn clear_field(&mut self, field: Field) -> bool {
        let update = self.collector.clear_field(field);
        self.apply(update)
    }

    pub fn toggle(&mut self, field: Field) -> bool {
        let update = self.collector.toggle(field);
        self.apply(update)
    }

    /// Fill the numeric fields with the sample patient.
    pub fn load_sample(&mut self) {
        for update in InputCollector::sample_updates() {
            self.update_field(update);
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.collector.is_ready()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.orchestrator.submit(self.collector.raw())
    }

    pub fn poll(&mut self) -> bool {
        self.orchestrator.poll()
    }

    pub fn wait(&mut self) -> &SubmissionState {
        self.orchestrator.wait()
    }

    /// Start over: abandon any request, wipe the inputs.
    pub fn new_assessment(&mut self) {
        self.orchestrator.reset();
        self.collector.clear();
    }

    fn apply(&mut self, update: Option<FieldUpdate>) -> bool {
        match update {
            Some(u) => {
                self.update_field(u);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, PredictionResult, SubmissionError, ValidationFailure};
    use crate::ports::mock::{result, MockRiskService};

    fn build_form(
        outcomes: Vec<Result<PredictionResult, SubmissionError>>,
    ) -> PredictionForm<MockRiskService> {
        PredictionForm::new(Arc::new(MockRiskService::new(outcomes)), Duration::ZERO)
    }

    #[test]
    fn test_edit_clears_validation_error() {
        let mut form = build_form(vec![]);
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(ValidationFailure::MissingNumericField)
        );
        assert!(form.state().error_message().is_some());

        assert!(form.push_char(Field::Age, '5'));
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_rejected_keystroke_keeps_error() {
        let mut form = build_form(vec![]);
        form.submit();
        assert!(!form.push_char(Field::Age, 'x'));
        assert!(form.state().error_message().is_some());
    }

    #[test]
    fn test_sample_submit_round_trip() {
        let mut form = build_form(vec![Ok(result(0, 0.66, 25.71))]);
        form.load_sample();
        assert!(form.toggle(Field::Gender));
        assert_eq!(form.raw().gender, Gender::Male);
        assert!(form.is_ready());

        assert_eq!(form.submit(), SubmitOutcome::Started);
        let state = form.wait();
        let result = state.result().expect("Should succeed");
        assert_eq!(result.percent_display(), "66.0%");
        assert_eq!(result.bmi_display(), "25.7");
    }

    #[test]
    fn test_new_assessment_wipes_everything() {
        let mut form = build_form(vec![Ok(result(1, 0.9, 30.0))]);
        form.load_sample();
        form.submit();
        form.wait();

        form.new_assessment();
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(form.raw(), &RawFormInput::default());
        assert!(!form.is_ready());
    }
}
