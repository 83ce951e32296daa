//! Domain model for a medication course.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{generate_id, RecordKind};

use super::RecordValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    /// Scheduled dose timestamps, ascending
    pub schedule: Vec<NaiveDateTime>,
    pub instructions: String,
    pub is_completed: bool,
}

impl Medication {
    pub fn new(
        name: &str,
        dosage: &str,
        mut schedule: Vec<NaiveDateTime>,
        instructions: &str,
    ) -> Result<Self, RecordValidationError> {
        if name.trim().is_empty() {
            return Err(RecordValidationError::EmptyMedicationName);
        }
        if dosage.trim().is_empty() {
            return Err(RecordValidationError::EmptyDosage);
        }

        schedule.sort();

        Ok(Self {
            id: generate_id(RecordKind::Medication),
            name: name.trim().to_string(),
            dosage: dosage.trim().to_string(),
            schedule,
            instructions: instructions.trim().to_string(),
            is_completed: false,
        })
    }

    /// Doses scheduled on the given calendar day, in schedule order
    pub fn doses_on(&self, day: NaiveDate) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.schedule.iter().copied().filter(move |dose| dose.date() == day)
    }

    /// Display title, e.g. "Amoxicillin 250mg"
    pub fn display_title(&self) -> String {
        format!("{} {}", self.name, self.dosage)
    }
}
