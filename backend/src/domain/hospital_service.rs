use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::hospital::RegisterHospitalCommand;
use crate::domain::models::Hospital;
use crate::storage::traits::{HospitalStorage, StorageError};

/// Directory of hospitals offered by the booking flow
pub struct HospitalService<S: HospitalStorage> {
    storage: Arc<S>,
}

impl<S: HospitalStorage> Clone for HospitalService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: HospitalStorage> HospitalService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn register_hospital(&self, command: RegisterHospitalCommand) -> Result<Hospital> {
        info!("Registering hospital: {} ({} mi)", command.name, command.distance);

        let hospital = Hospital::new(
            &command.name,
            &command.address,
            &command.city,
            &command.state,
            &command.zip_code,
            command.distance,
            command.is_favorite,
        )?;
        self.storage.store_hospital(&hospital)?;

        info!("Registered hospital {} with ID: {}", hospital.name, hospital.id);
        Ok(hospital)
    }

    pub fn get_hospital(&self, hospital_id: &str) -> Result<Option<Hospital>> {
        let hospital = self.storage.get_hospital(hospital_id)?;
        if hospital.is_none() {
            warn!("Hospital not found: {}", hospital_id);
        }
        Ok(hospital)
    }

    /// Hospitals nearest first; ties keep registration order
    pub fn list_hospitals(&self, favorites_only: bool) -> Result<Vec<Hospital>> {
        let mut hospitals: Vec<Hospital> = self
            .storage
            .list_hospitals()?
            .into_iter()
            .filter(|hospital| !favorites_only || hospital.is_favorite)
            .collect();

        hospitals.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(hospitals)
    }

    /// Flip the favorite flag and return the updated hospital
    pub fn toggle_favorite(&self, hospital_id: &str) -> Result<Hospital> {
        let mut hospital = self
            .storage
            .get_hospital(hospital_id)?
            .ok_or_else(|| StorageError::NotFound(hospital_id.to_string()))
            .with_context(|| format!("Hospital not found: {}", hospital_id))?;

        hospital.is_favorite = !hospital.is_favorite;
        self.storage.update_hospital(&hospital)?;

        info!("Hospital {} favorite={}", hospital.id, hospital.is_favorite);
        Ok(hospital)
    }
}
