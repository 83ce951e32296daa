//! Domain model for a scheduled appointment.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::{generate_id, RecordKind};

use super::RecordValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub date_time: NaiveDateTime,
    pub location: String,
    pub doctor: String,
    pub notes: String,
}

impl Appointment {
    pub fn new(
        title: &str,
        date_time: NaiveDateTime,
        location: &str,
        doctor: &str,
        notes: &str,
    ) -> Result<Self, RecordValidationError> {
        if title.trim().is_empty() {
            return Err(RecordValidationError::EmptyAppointmentTitle);
        }

        Ok(Self {
            id: generate_id(RecordKind::Appointment),
            title: title.trim().to_string(),
            date_time,
            location: location.trim().to_string(),
            doctor: doctor.trim().to_string(),
            notes: notes.trim().to_string(),
        })
    }
}
