use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{parse_id, RecordKind};
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::commands::child::{
    AddAppointmentCommand, AddMedicationCommand, AddVaccinationCommand, CreateChildCommand,
    DeleteChildResult, SetCompletionCommand,
};
use crate::domain::models::{Appointment, Child, Medication, RecordValidationError, Vaccination};
use crate::storage::traits::{ChildStorage, StorageError};

/// Service for managing children and the health records they own
pub struct ChildService<S: ChildStorage> {
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: ChildStorage> Clone for ChildService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: ChildStorage> ChildService<S> {
    /// Create a new ChildService
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Create a new child
    pub fn create_child(&self, command: CreateChildCommand) -> Result<Child> {
        info!("Creating child: name={}, birth_date={}", command.name, command.birth_date);

        let birth_date = NaiveDate::parse_from_str(command.birth_date.trim(), "%Y-%m-%d")
            .context("Invalid birth date format. Use YYYY-MM-DD.")?;

        let child = Child::new(&command.name, birth_date, command.color, self.clock.today())?;
        self.storage.store_child(&child)?;

        info!("Created child: {} with ID: {}", child.name, child.id);

        Ok(child)
    }

    /// Get a child by ID
    pub fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self.storage.get_child(child_id)?;

        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }

        Ok(child)
    }

    /// List all children in the order they were added
    pub fn list_children(&self) -> Result<Vec<Child>> {
        let children = self.storage.list_children()?;
        debug!("Found {} children", children.len());
        Ok(children)
    }

    /// Delete a child together with all of its records
    pub fn delete_child(&self, child_id: &str) -> Result<DeleteChildResult> {
        info!("Deleting child: {}", child_id);

        let child = self.load_child(child_id)?;
        self.storage.delete_child(child_id)?;

        info!(
            "Deleted child: {} with ID: {} ({} records)",
            child.name,
            child.id,
            child.record_count()
        );

        Ok(DeleteChildResult {
            removed_records: child.record_count(),
            success_message: format!("Child '{}' deleted successfully", child.name),
        })
    }

    pub fn add_medication(&self, command: AddMedicationCommand) -> Result<Medication> {
        let mut child = self.load_child(&command.child_id)?;

        let medication = Medication::new(&command.name, &command.dosage, command.schedule, &command.instructions)?;
        child.medications.push(medication.clone());
        self.storage.update_child(&child)?;

        info!(
            "Added medication {} ({} doses) for child {}",
            medication.display_title(),
            medication.schedule.len(),
            child.id
        );

        Ok(medication)
    }

    pub fn add_appointment(&self, command: AddAppointmentCommand) -> Result<Appointment> {
        let mut child = self.load_child(&command.child_id)?;

        let appointment = Appointment::new(
            &command.title,
            command.date_time,
            &command.location,
            &command.doctor,
            &command.notes,
        )?;
        child.appointments.push(appointment.clone());
        self.storage.update_child(&child)?;

        info!("Added appointment '{}' at {} for child {}", appointment.title, appointment.date_time, child.id);

        Ok(appointment)
    }

    pub fn add_vaccination(&self, command: AddVaccinationCommand) -> Result<Vaccination> {
        let mut child = self.load_child(&command.child_id)?;

        let vaccination = Vaccination::new(&command.name, command.administered_at, command.due_date, &command.notes)?;
        child.vaccinations.push(vaccination.clone());
        self.storage.update_child(&child)?;

        info!("Added vaccination {} due {} for child {}", vaccination.name, vaccination.due_date, child.id);

        Ok(vaccination)
    }

    pub fn set_medication_completed(&self, command: SetCompletionCommand) -> Result<Medication> {
        expect_record_kind(&command.record_id, RecordKind::Medication)?;
        let mut child = self.load_child(&command.child_id)?;

        let medication = child
            .medication_mut(&command.record_id)
            .ok_or_else(|| StorageError::NotFound(command.record_id.clone()))?;
        medication.is_completed = command.is_completed;
        let medication = medication.clone();

        self.storage.update_child(&child)?;

        info!("Medication {} completed={}", medication.id, medication.is_completed);

        Ok(medication)
    }

    pub fn set_vaccination_completed(&self, command: SetCompletionCommand) -> Result<Vaccination> {
        expect_record_kind(&command.record_id, RecordKind::Vaccination)?;
        let mut child = self.load_child(&command.child_id)?;

        let vaccination = child
            .vaccination_mut(&command.record_id)
            .ok_or_else(|| StorageError::NotFound(command.record_id.clone()))?;
        vaccination.is_completed = command.is_completed;
        let vaccination = vaccination.clone();

        self.storage.update_child(&child)?;

        info!("Vaccination {} completed={}", vaccination.id, vaccination.is_completed);

        Ok(vaccination)
    }

    fn load_child(&self, child_id: &str) -> Result<Child> {
        self.storage
            .get_child(child_id)?
            .ok_or_else(|| StorageError::NotFound(child_id.to_string()))
            .with_context(|| format!("Child not found: {}", child_id))
    }
}

/// Reject IDs that are malformed or name a different kind of record
fn expect_record_kind(record_id: &str, expected: RecordKind) -> Result<()> {
    let (kind, _) = parse_id(record_id).with_context(|| format!("Invalid record ID: {}", record_id))?;
    if kind != expected {
        return Err(RecordValidationError::WrongRecordKind(record_id.to_string(), expected.prefix()).into());
    }
    Ok(())
}
