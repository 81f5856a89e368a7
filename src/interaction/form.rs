//! Multi-field symptom form, assembled into one triage input.

use serde::{Deserialize, Serialize};

/// The fields of a symptom check form.
///
/// Every field is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageForm {
    /// How the user is feeling (e.g., "I have a sore throat and mild fever").
    pub feeling: String,
    /// How long it has been going on (e.g., "2 days").
    pub duration: String,
    /// Measured temperature, if any (e.g., "38.5 C").
    pub temperature: String,
    /// Other symptoms or details.
    pub notes: String,
}

impl TriageForm {
    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| field.trim().is_empty())
    }

    /// Join the fields with single spaces, in form order.
    ///
    /// Fields are joined as-is; the engine's normalizer takes care of extra
    /// whitespace from empty fields.
    pub fn assemble(&self) -> String {
        self.fields().join(" ")
    }

    fn fields(&self) -> [&str; 4] {
        [&self.feeling, &self.duration, &self.temperature, &self.notes]
    }
}

// Tests.
