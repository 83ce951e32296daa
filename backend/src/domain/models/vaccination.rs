//! Domain model for a vaccination record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::{generate_id, RecordKind};

use super::RecordValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub id: String,
    pub name: String,
    /// When the previous dose was administered
    pub administered_at: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub is_completed: bool,
    pub notes: String,
}

impl Vaccination {
    pub fn new(
        name: &str,
        administered_at: NaiveDateTime,
        due_date: NaiveDateTime,
        notes: &str,
    ) -> Result<Self, RecordValidationError> {
        if name.trim().is_empty() {
            return Err(RecordValidationError::EmptyVaccinationName);
        }
        if due_date < administered_at {
            return Err(RecordValidationError::DueBeforeAdministered);
        }

        Ok(Self {
            id: generate_id(RecordKind::Vaccination),
            name: name.trim().to_string(),
            administered_at,
            due_date,
            is_completed: false,
            notes: notes.trim().to_string(),
        })
    }

    /// Overdue means still open and past its due date. Derived, never stored.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_completed && self.due_date < now
    }
}
