//! Wire types for the scoring service and the display rules for its answer.

use serde::{Deserialize, Serialize};

use super::vitals::{Gender, ValidatedInput, YesNo};

/// Days per year used by the age conversion.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Request body for `POST /predict`.
///
/// Age is always sent in days; the model was trained on day counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub sys_bp: i64,
    pub dia_bp: i64,
    pub gender: Gender,
    pub smoke: YesNo,
    pub alco: YesNo,
    pub active: YesNo,
}

impl From<&ValidatedInput> for PredictionRequest {
    fn from(input: &ValidatedInput) -> Self {
        Self {
            age: age_years_to_days(input.age_years),
            height: input.height_cm,
            weight: input.weight_kg,
            // Truncate like integer parsing of the text entry. Validation has
            // already rejected readings outside the i64 range.
            sys_bp: input.sys_bp.trunc() as i64,
            dia_bp: input.dia_bp.trunc() as i64,
            gender: input.gender,
            smoke: input.smoke,
            alco: input.alco,
            active: input.active,
        }
    }
}

/// `floor(years × 365)`.
#[must_use]
pub fn age_years_to_days(years: f64) -> u32 {
    (years * DAYS_PER_YEAR).floor().max(0.0) as u32
}

/// Response body as received. Converted into [`PredictionResult`] only after
/// the shape checks pass.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i64,
    pub probability: f64,
    pub risk_label: String,
    pub bmi: f64,
}

/// Why a response body was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseShapeError {
    #[error("prediction must be 0 or 1, got {0}")]
    Prediction(i64),

    #[error("probability {0} outside [0, 1]")]
    Probability(f64),

    #[error("bmi {0} is not a finite number")]
    Bmi(f64),
}

/// Binary model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskPolarity {
    Low,
    High,
}

impl RiskPolarity {
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk Detected",
            Self::High => "High Risk Detected",
        }
    }

    /// Lifestyle advice shown under the result.
    #[must_use]
    pub fn tips(&self) -> [&'static str; 3] {
        match self {
            Self::High => [
                "Consult a cardiologist specifically for further tests.",
                "Monitor your blood pressure daily.",
                "Reduce salt and saturated fats in your diet.",
            ],
            Self::Low => [
                "Maintain your healthy lifestyle!",
                "Keep active with regular moderate exercise.",
                "Continue a balanced diet.",
            ],
        }
    }
}

impl std::fmt::Display for RiskPolarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Reference range printed next to the BMI.
pub const BMI_NORMAL_RANGE: &str = "Normal: 18.5 - 24.9";

/// Shown under every result.
pub const RESULT_DISCLAIMER: &str =
    "This is an algorithmic prediction, not a medical diagnosis. In emergencies, contact your family doctor.";

/// Assessment returned by the scoring service.
///
/// `probability` is the model's confidence in `polarity`, not necessarily the
/// probability of high risk, so polarity never comes from thresholding it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub polarity: RiskPolarity,
    pub probability: f64,
    pub risk_label: String,
    pub bmi: f64,
}

impl TryFrom<PredictionResponse> for PredictionResult {
    type Error = ResponseShapeError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        let polarity = match response.prediction {
            0 => RiskPolarity::Low,
            1 => RiskPolarity::High,
            other => return Err(ResponseShapeError::Prediction(other)),
        };
        if !response.probability.is_finite() || !(0.0..=1.0).contains(&response.probability) {
            return Err(ResponseShapeError::Probability(response.probability));
        }
        if !response.bmi.is_finite() {
            return Err(ResponseShapeError::Bmi(response.bmi));
        }

        Ok(Self {
            polarity,
            probability: response.probability,
            risk_label: response.risk_label,
            bmi: response.bmi,
        })
    }
}

impl PredictionResult {
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.polarity == RiskPolarity::High
    }

    /// `probability × 100` to one decimal, with a percent sign.
    #[must_use]
    pub fn percent_display(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }

    /// Service-computed BMI to one decimal. Never recomputed locally.
    #[must_use]
    pub fn bmi_display(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(prediction: i64, probability: f64, bmi: f64) -> PredictionResponse {
        PredictionResponse {
            prediction,
            probability,
            risk_label: "High".into(),
            bmi,
        }
    }

    fn validated(age_years: f64) -> ValidatedInput {
        ValidatedInput {
            age_years,
            height_cm: 165.0,
            weight_kg: 70.0,
            sys_bp: 120.0,
            dia_bp: 80.0,
            gender: Gender::Female,
            smoke: YesNo::No,
            alco: YesNo::No,
            active: YesNo::Yes,
        }
    }

    #[test]
    fn test_age_converted_to_days() {
        assert_eq!(age_years_to_days(50.0), 18_250);
        assert_eq!(age_years_to_days(10.0), 3_650);
        assert_eq!(age_years_to_days(100.0), 36_500);
        // floor(50.5 * 365) = floor(18432.5)
        assert_eq!(age_years_to_days(50.5), 18_432);

        for years in 10..=100 {
            let request = PredictionRequest::from(&validated(f64::from(years)));
            assert_eq!(request.age, (years * 365) as u32);
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let request = PredictionRequest::from(&validated(50.0));
        let json = serde_json::to_value(&request).expect("Should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "age": 18250,
                "height": 165.0,
                "weight": 70.0,
                "sys_bp": 120,
                "dia_bp": 80,
                "gender": "Female",
                "smoke": "No",
                "alco": "No",
                "active": "Yes"
            })
        );
    }

    #[test]
    fn test_blood_pressure_truncated() {
        let mut input = validated(40.0);
        input.sys_bp = 129.9;
        input.dia_bp = 84.2;
        let request = PredictionRequest::from(&input);
        assert_eq!(request.sys_bp, 129);
        assert_eq!(request.dia_bp, 84);
    }

    #[test]
    fn test_large_blood_pressure_sent_unchanged() {
        let mut input = validated(50.0);
        input.sys_bp = 3_000_000_000.0;
        let request = PredictionRequest::from(&input);
        assert_eq!(request.sys_bp, 3_000_000_000);

        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(json["sys_bp"], serde_json::json!(3_000_000_000_i64));
    }

    #[test]
    fn test_display_values() {
        let result = PredictionResult::try_from(response(1, 0.812, 24.77)).expect("valid");
        assert_eq!(result.percent_display(), "81.2%");
        assert_eq!(result.bmi_display(), "24.8");
        assert!(result.is_high_risk());
    }

    #[test]
    fn test_polarity_follows_prediction_not_probability() {
        // Low class reported with high confidence in that class.
        let low = PredictionResult::try_from(response(0, 0.9, 22.0)).expect("valid");
        assert_eq!(low.polarity, RiskPolarity::Low);

        // High class reported with a probability under one half.
        let high = PredictionResult::try_from(response(1, 0.3, 31.0)).expect("valid");
        assert_eq!(high.polarity, RiskPolarity::High);
        assert_eq!(high.polarity.headline(), "High Risk Detected");
    }

    #[test]
    fn test_shape_violations_rejected() {
        assert_eq!(
            PredictionResult::try_from(response(2, 0.5, 20.0)),
            Err(ResponseShapeError::Prediction(2))
        );
        assert!(matches!(
            PredictionResult::try_from(response(1, 1.5, 20.0)),
            Err(ResponseShapeError::Probability(_))
        ));
        assert!(matches!(
            PredictionResult::try_from(response(1, f64::NAN, 20.0)),
            Err(ResponseShapeError::Probability(_))
        ));
        assert!(matches!(
            PredictionResult::try_from(response(0, 0.2, f64::INFINITY)),
            Err(ResponseShapeError::Bmi(_))
        ));
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"prediction":1,"probability":0.812,"risk_label":"High Risk","bmi":24.77}"#;
        let parsed: PredictionResponse = serde_json::from_str(body).expect("Should parse");
        let result = PredictionResult::try_from(parsed).expect("valid");
        assert_eq!(result.risk_label, "High Risk");

        let missing = r#"{"prediction":1,"probability":0.812}"#;
        assert!(serde_json::from_str::<PredictionResponse>(missing).is_err());
    }

    #[test]
    fn test_tips_per_polarity() {
        assert_eq!(RiskPolarity::Low.tips()[0], "Maintain your healthy lifestyle!");
        assert!(RiskPolarity::High.tips()[0].contains("cardiologist"));
    }
}
