//! Domain model for a tracked child and the records it owns.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{generate_id, RecordKind, ThemeColor};

use super::{Appointment, Medication, Vaccination};

/// A child together with its medication, appointment and vaccination records.
///
/// Records are owned by the child, so removing a child removes its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    /// Display age, e.g. "5y" or "8m"
    pub age_label: String,
    /// Avatar initial, e.g. "E"
    pub initial: String,
    pub color: ThemeColor,
    pub birth_date: NaiveDate,
    pub medications: Vec<Medication>,
    pub appointments: Vec<Appointment>,
    pub vaccinations: Vec<Vaccination>,
}

impl Child {
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Create a child with no records. `today` is used for the age label.
    pub fn new(
        name: &str,
        birth_date: NaiveDate,
        color: ThemeColor,
        today: NaiveDate,
    ) -> Result<Self, ChildValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChildValidationError::EmptyName);
        }
        if name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(ChildValidationError::NameTooLong);
        }
        if birth_date > today {
            return Err(ChildValidationError::BirthDateInFuture);
        }

        Ok(Self {
            id: generate_id(RecordKind::Child),
            name: name.to_string(),
            age_label: Self::age_label(birth_date, today),
            initial: Self::initial_for(name),
            color,
            birth_date,
            medications: Vec::new(),
            appointments: Vec::new(),
            vaccinations: Vec::new(),
        })
    }

    /// Age in whole years ("5y"), or whole months under one year ("8m")
    pub fn age_label(birth_date: NaiveDate, today: NaiveDate) -> String {
        let mut months = (today.year() - birth_date.year()) * 12
            + today.month() as i32
            - birth_date.month() as i32;
        if today.day() < birth_date.day() {
            months -= 1;
        }
        let months = months.max(0);

        if months < 12 {
            format!("{}m", months)
        } else {
            format!("{}y", months / 12)
        }
    }

    fn initial_for(name: &str) -> String {
        name.chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// IDs of every record owned by this child, including its own
    pub fn record_ids(&self) -> Vec<&str> {
        std::iter::once(self.id.as_str())
            .chain(self.medications.iter().map(|m| m.id.as_str()))
            .chain(self.appointments.iter().map(|a| a.id.as_str()))
            .chain(self.vaccinations.iter().map(|v| v.id.as_str()))
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.medications.len() + self.appointments.len() + self.vaccinations.len()
    }

    pub fn medication_mut(&mut self, medication_id: &str) -> Option<&mut Medication> {
        self.medications.iter_mut().find(|m| m.id == medication_id)
    }

    pub fn vaccination_mut(&mut self, vaccination_id: &str) -> Option<&mut Vaccination> {
        self.vaccinations.iter_mut().find(|v| v.id == vaccination_id)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChildValidationError {
    #[error("Child name cannot be empty")]
    EmptyName,
    #[error("Child name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,
}
