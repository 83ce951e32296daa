//! Domain models for children and their health records.

pub mod appointment;
pub mod child;
pub mod hospital;
pub mod medication;
pub mod vaccination;

pub use appointment::Appointment;
pub use child::{Child, ChildValidationError};
pub use hospital::{Hospital, HospitalValidationError};
pub use medication::Medication;
pub use vaccination::Vaccination;

/// Validation failures for medication, appointment and vaccination records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("Medication name cannot be empty")]
    EmptyMedicationName,
    #[error("Dosage cannot be empty")]
    EmptyDosage,
    #[error("Appointment title cannot be empty")]
    EmptyAppointmentTitle,
    #[error("Vaccination name cannot be empty")]
    EmptyVaccinationName,
    #[error("Vaccination due date cannot be before it was administered")]
    DueBeforeAdministered,
    #[error("Record {0} is not a {1}")]
    WrongRecordKind(String, &'static str),
}
