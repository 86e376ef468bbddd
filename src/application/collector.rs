//! Input collector: owns the raw form values and decides submit eligibility.

use crate::domain::{Field, FieldUpdate, RawFormInput, ValidatedInput, ValidationFailure};

/// Holds one form's raw input.
///
/// Edits arrive as [`FieldUpdate`]s. The keystroke helpers (`push_char`,
/// `pop_char`, `toggle`, ...) only compute the update; the caller applies it
/// through `update_field` so every edit takes the same path.
#[derive(Debug, Default)]
pub struct InputCollector {
    raw: RawFormInput,
}

/// Values pre-filled by the sample-data shortcut.
const SAMPLE: [(Field, &str); 5] = [
    (Field::Age, "50"),
    (Field::Height, "165"),
    (Field::Weight, "70"),
    (Field::SysBp, "120"),
    (Field::DiaBp, "80"),
];

impl InputCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn raw(&self) -> &RawFormInput {
        &self.raw
    }

    /// Replace exactly one field.
    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::trace!(field = ?update.field(), "Field updated");
        self.raw.apply(update);
    }

    /// Validate the current snapshot.
    ///
    /// # Errors
    /// See [`RawFormInput::validate`].
    pub fn validate(&self) -> Result<ValidatedInput, ValidationFailure> {
        self.raw.validate()
    }

    /// Whether a submit would pass validation.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.validate().is_ok()
    }

    /// Append a typed character to a numeric field.
    ///
    /// Only digits and a single decimal point are accepted.
    #[must_use]
    pub fn push_char(&self, field: Field, c: char) -> Option<FieldUpdate> {
        if !field.is_numeric() {
            return None;
        }
        let current = self.raw.display_value(field);
        let accepted = c.is_ascii_digit() || (c == '.' && !current.contains('.'));
        if !accepted {
            return None;
        }
        let mut value = current.to_string();
        value.push(c);
        FieldUpdate::text(field, value)
    }

    /// Remove the last character of a numeric field.
    #[must_use]
    pub fn pop_char(&self, field: Field) -> Option<FieldUpdate> {
        let current = self.raw.display_value(field);
        if !field.is_numeric() || current.is_empty() {
            return None;
        }
        let mut value = current.to_string();
        value.pop();
        FieldUpdate::text(field, value)
    }

    /// Empty a numeric field.
    #[must_use]
    pub fn clear_field(&self, field: Field) -> Option<FieldUpdate> {
        if self.raw.display_value(field).is_empty() {
            return None;
        }
        FieldUpdate::text(field, String::new())
    }

    /// Flip a two-valued field.
    #[must_use]
    pub fn toggle(&self, field: Field) -> Option<FieldUpdate> {
        match field {
            Field::Gender => Some(FieldUpdate::Gender(self.raw.gender.toggled())),
            Field::Smoke => Some(FieldUpdate::Smoke(self.raw.smoke.toggled())),
            Field::Alco => Some(FieldUpdate::Alco(self.raw.alco.toggled())),
            Field::Active => Some(FieldUpdate::Active(self.raw.active.toggled())),
            _ => None,
        }
    }

    /// Updates that fill the numeric fields with the sample patient.
    #[must_use]
    pub fn sample_updates() -> Vec<FieldUpdate> {
        SAMPLE
            .iter()
            .filter_map(|(field, value)| FieldUpdate::text(*field, *value))
            .collect()
    }

    /// Wipe all values back to the defaults.
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}
