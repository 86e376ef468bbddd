//! Patient vitals as entered in the form, and the rules that validate them.
//!
//! Numeric fields stay text until validation because they come straight from
//! keyboard entry. Categorical fields are closed enums, so they can never be
//! invalid.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Youngest age (years) accepted at the form boundary.
pub const MIN_AGE_YEARS: f64 = 10.0;

/// Oldest age (years) accepted at the form boundary.
pub const MAX_AGE_YEARS: f64 = 100.0;

/// Biological sex as expected by the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    /// The other option, used by the form's toggle keys.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Female => Self::Male,
            Self::Male => Self::Female,
        }
    }
}

/// Yes/No answer for the lifestyle questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the nine form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Height,
    Weight,
    SysBp,
    DiaBp,
    Gender,
    Smoke,
    Alco,
    Active,
}

impl Field {
    /// Display order of the form.
    pub const ALL: [Field; 9] = [
        Field::Age,
        Field::Gender,
        Field::Height,
        Field::Weight,
        Field::SysBp,
        Field::DiaBp,
        Field::Smoke,
        Field::Alco,
        Field::Active,
    ];

    /// The five fields that must be present and parseable.
    pub const NUMERIC: [Field; 5] = [
        Field::Age,
        Field::Height,
        Field::Weight,
        Field::SysBp,
        Field::DiaBp,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age (Years)",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
            Self::SysBp => "Systolic BP",
            Self::DiaBp => "Diastolic BP",
            Self::Gender => "Gender",
            Self::Smoke => "Smoker",
            Self::Alco => "Alcohol",
            Self::Active => "Active",
        }
    }

    /// Placeholder shown while a numeric field is empty.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Age => "50 (10-100)",
            Self::Height => "165",
            Self::Weight => "70",
            Self::SysBp => "120 mmHg",
            Self::DiaBp => "80 mmHg",
            Self::Gender => "Female / Male",
            Self::Smoke | Self::Alco | Self::Active => "Yes / No",
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        Self::NUMERIC.contains(self)
    }
}

/// A replacement value for exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Age(String),
    Height(String),
    Weight(String),
    SysBp(String),
    DiaBp(String),
    Gender(Gender),
    Smoke(YesNo),
    Alco(YesNo),
    Active(YesNo),
}

impl FieldUpdate {
    /// Build a text update for a numeric field. Returns `None` for enum fields.
    #[must_use]
    pub fn text(field: Field, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match field {
            Field::Age => Some(Self::Age(value)),
            Field::Height => Some(Self::Height(value)),
            Field::Weight => Some(Self::Weight(value)),
            Field::SysBp => Some(Self::SysBp(value)),
            Field::DiaBp => Some(Self::DiaBp(value)),
            Field::Gender | Field::Smoke | Field::Alco | Field::Active => None,
        }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Age(_) => Field::Age,
            Self::Height(_) => Field::Height,
            Self::Weight(_) => Field::Weight,
            Self::SysBp(_) => Field::SysBp,
            Self::DiaBp(_) => Field::DiaBp,
            Self::Gender(_) => Field::Gender,
            Self::Smoke(_) => Field::Smoke,
            Self::Alco(_) => Field::Alco,
            Self::Active(_) => Field::Active,
        }
    }
}

/// Literal form values, unvalidated.
///
/// Every field is always present; an empty numeric field is `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFormInput {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub sys_bp: String,
    pub dia_bp: String,
    pub gender: Gender,
    pub smoke: YesNo,
    pub alco: YesNo,
    pub active: YesNo,
}

impl Default for RawFormInput {
    fn default() -> Self {
        Self {
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            sys_bp: String::new(),
            dia_bp: String::new(),
            gender: Gender::Female,
            smoke: YesNo::No,
            alco: YesNo::No,
            active: YesNo::Yes,
        }
    }
}

impl RawFormInput {
    /// Replace exactly one field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Age(v) => replace_text(&mut self.age, v),
            FieldUpdate::Height(v) => replace_text(&mut self.height, v),
            FieldUpdate::Weight(v) => replace_text(&mut self.weight, v),
            FieldUpdate::SysBp(v) => replace_text(&mut self.sys_bp, v),
            FieldUpdate::DiaBp(v) => replace_text(&mut self.dia_bp, v),
            FieldUpdate::Gender(v) => self.gender = v,
            FieldUpdate::Smoke(v) => self.smoke = v,
            FieldUpdate::Alco(v) => self.alco = v,
            FieldUpdate::Active(v) => self.active = v,
        }
    }

    /// Text content of a field as shown in the form.
    #[must_use]
    pub fn display_value(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::SysBp => &self.sys_bp,
            Field::DiaBp => &self.dia_bp,
            Field::Gender => self.gender.as_str(),
            Field::Smoke => self.smoke.as_str(),
            Field::Alco => self.alco.as_str(),
            Field::Active => self.active.as_str(),
        }
    }

    /// Wipe the numeric buffers and restore enum defaults.
    pub fn clear(&mut self) {
        self.age.zeroize();
        self.height.zeroize();
        self.weight.zeroize();
        self.sys_bp.zeroize();
        self.dia_bp.zeroize();
        let defaults = Self::default();
        self.gender = defaults.gender;
        self.smoke = defaults.smoke;
        self.alco = defaults.alco;
        self.active = defaults.active;
    }

    /// Validate and convert into typed input.
    ///
    /// # Errors
    /// `MissingNumericField` if any numeric field is empty, not a number or
    /// not finite; `AgeOutOfRange` if the age is outside the form bounds;
    /// `BloodPressureOutOfRange` if a reading has no whole-number wire form.
    pub fn validate(&self) -> Result<ValidatedInput, ValidationFailure> {
        let age = parse_numeric(&self.age)?;
        let height = parse_numeric(&self.height)?;
        let weight = parse_numeric(&self.weight)?;
        let sys_bp = parse_numeric(&self.sys_bp)?;
        let dia_bp = parse_numeric(&self.dia_bp)?;

        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
            return Err(ValidationFailure::AgeOutOfRange);
        }
        if !fits_whole_reading(sys_bp) || !fits_whole_reading(dia_bp) {
            return Err(ValidationFailure::BloodPressureOutOfRange);
        }

        Ok(ValidatedInput {
            age_years: age,
            height_cm: height,
            weight_kg: weight,
            sys_bp,
            dia_bp,
            gender: self.gender,
            smoke: self.smoke,
            alco: self.alco,
            active: self.active,
        })
    }
}

fn replace_text(slot: &mut String, value: String) {
    slot.zeroize();
    *slot = value;
}

/// Whether `value` truncates to an `i64` without saturating.
fn fits_whole_reading(value: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    let whole = value.trunc();
    whole >= i64::MIN as f64 && whole < i64::MAX as f64
}

fn parse_numeric(raw: &str) -> Result<f64, ValidationFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::MissingNumericField);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationFailure::MissingNumericField),
    }
}

/// Why a form could not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Please fill in all numerical fields.")]
    MissingNumericField,

    #[error("Age must be between 10 and 100 years.")]
    AgeOutOfRange,

    #[error("Blood pressure values are too large.")]
    BloodPressureOutOfRange,
}

impl ValidationFailure {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingNumericField => "missing_numeric_field",
            Self::AgeOutOfRange => "age_out_of_range",
            Self::BloodPressureOutOfRange => "blood_pressure_out_of_range",
        }
    }
}

/// Form input whose numeric fields are present, finite and in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sys_bp: f64,
    pub dia_bp: f64,
    pub gender: Gender,
    pub smoke: YesNo,
    pub alco: YesNo,
    pub active: YesNo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawFormInput {
        RawFormInput {
            age: "50".into(),
            height: "165".into(),
            weight: "70".into(),
            sys_bp: "120".into(),
            dia_bp: "80".into(),
            ..RawFormInput::default()
        }
    }

    #[test]
    fn test_defaults_match_form() {
        let raw = RawFormInput::default();
        assert!(raw.age.is_empty());
        assert_eq!(raw.gender, Gender::Female);
        assert_eq!(raw.smoke, YesNo::No);
        assert_eq!(raw.alco, YesNo::No);
        assert_eq!(raw.active, YesNo::Yes);
    }

    #[test]
    fn test_validate_complete_input() {
        let validated = filled().validate().expect("Should validate");
        assert!((validated.age_years - 50.0).abs() < f64::EPSILON);
        assert!((validated.height_cm - 165.0).abs() < f64::EPSILON);
        assert_eq!(validated.active, YesNo::Yes);
    }

    #[test]
    fn test_each_missing_numeric_field_is_rejected() {
        for field in Field::NUMERIC {
            let mut raw = filled();
            raw.apply(FieldUpdate::text(field, "").expect("numeric field"));
            assert_eq!(
                raw.validate(),
                Err(ValidationFailure::MissingNumericField),
                "{:?} empty should fail",
                field
            );
        }
    }

    #[test]
    fn test_non_numeric_and_non_finite_rejected() {
        for bad in ["abc", "12a", "NaN", "inf", "-inf", "   "] {
            let mut raw = filled();
            raw.apply(FieldUpdate::Weight(bad.into()));
            assert_eq!(raw.validate(), Err(ValidationFailure::MissingNumericField));
        }
    }

    #[test]
    fn test_age_bounds() {
        let mut raw = filled();
        raw.apply(FieldUpdate::Age("9".into()));
        assert_eq!(raw.validate(), Err(ValidationFailure::AgeOutOfRange));

        raw.apply(FieldUpdate::Age("101".into()));
        assert_eq!(raw.validate(), Err(ValidationFailure::AgeOutOfRange));

        raw.apply(FieldUpdate::Age("10".into()));
        assert!(raw.validate().is_ok());
        raw.apply(FieldUpdate::Age("100".into()));
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_blood_pressure_must_fit_wire_integer() {
        let mut raw = filled();
        raw.apply(FieldUpdate::SysBp("3000000000".into()));
        let validated = raw.validate().expect("large but representable");
        assert!((validated.sys_bp - 3_000_000_000.0).abs() < f64::EPSILON);

        raw.apply(FieldUpdate::DiaBp("99999999999999999999".into()));
        assert_eq!(
            raw.validate(),
            Err(ValidationFailure::BloodPressureOutOfRange)
        );

        raw.apply(FieldUpdate::DiaBp("80".into()));
        raw.apply(FieldUpdate::SysBp("9223372036854775808".into()));
        assert_eq!(
            raw.validate(),
            Err(ValidationFailure::BloodPressureOutOfRange)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let raw = filled();
        assert_eq!(raw.validate(), raw.validate());

        let empty = RawFormInput::default();
        assert_eq!(empty.validate(), empty.validate());
    }

    #[test]
    fn test_apply_replaces_only_one_field() {
        let mut raw = filled();
        let before = raw.clone();
        raw.apply(FieldUpdate::Smoke(YesNo::Yes));

        assert_eq!(raw.smoke, YesNo::Yes);
        assert_eq!(raw.age, before.age);
        assert_eq!(raw.gender, before.gender);
        assert_eq!(raw.alco, before.alco);
    }

    #[test]
    fn test_text_update_rejects_enum_fields() {
        assert!(FieldUpdate::text(Field::Gender, "Male").is_none());
        assert_eq!(
            FieldUpdate::text(Field::SysBp, "130"),
            Some(FieldUpdate::SysBp("130".into()))
        );
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut raw = filled();
        raw.apply(FieldUpdate::Gender(Gender::Male));
        raw.clear();
        assert_eq!(raw, RawFormInput::default());
    }

    #[test]
    fn test_failure_codes() {
        assert_eq!(
            ValidationFailure::MissingNumericField.code(),
            "missing_numeric_field"
        );
        assert_eq!(
            ValidationFailure::MissingNumericField.to_string(),
            "Please fill in all numerical fields."
        );
    }
}
