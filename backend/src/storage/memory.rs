//! # In-Memory Storage
//!
//! Process-local implementation of the storage traits. Clones share the same
//! underlying state, so every service built from one `MemoryStorage` sees the
//! same children and hospitals.

use anyhow::{anyhow, Result};
use log::debug;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{ChildStorage, HospitalStorage, StorageError};
use crate::domain::models::{Child, Hospital};

#[derive(Debug, Default)]
struct MemoryState {
    children: Vec<Child>,
    hospitals: Vec<Hospital>,
}

impl MemoryState {
    /// First ID in `ids` that is already taken, ignoring the records of `exclude_child`
    fn conflicting_id<'a>(&self, ids: &[&'a str], exclude_child: Option<&str>) -> Option<&'a str> {
        let mut taken: HashSet<&str> = self
            .children
            .iter()
            .filter(|child| Some(child.id.as_str()) != exclude_child)
            .flat_map(|child| child.record_ids())
            .collect();
        taken.extend(self.hospitals.iter().map(|hospital| hospital.id.as_str()));

        // IDs must also be unique within the incoming record set
        let mut seen = HashSet::new();
        ids.iter()
            .copied()
            .find(|id| taken.contains(id) || !seen.insert(*id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("In-memory storage lock poisoned"))
    }
}

impl ChildStorage for MemoryStorage {
    fn store_child(&self, child: &Child) -> Result<()> {
        let mut state = self.lock()?;

        if let Some(id) = state.conflicting_id(&child.record_ids(), None) {
            return Err(StorageError::DuplicateId(id.to_string()).into());
        }

        state.children.push(child.clone());
        debug!("Stored child {} with {} records", child.id, child.record_count());
        Ok(())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let state = self.lock()?;
        Ok(state.children.iter().find(|child| child.id == child_id).cloned())
    }

    fn list_children(&self) -> Result<Vec<Child>> {
        let state = self.lock()?;
        Ok(state.children.clone())
    }

    fn update_child(&self, child: &Child) -> Result<()> {
        let mut state = self.lock()?;

        let position = state
            .children
            .iter()
            .position(|existing| existing.id == child.id)
            .ok_or_else(|| StorageError::NotFound(child.id.clone()))?;

        if let Some(id) = state.conflicting_id(&child.record_ids(), Some(child.id.as_str())) {
            return Err(StorageError::DuplicateId(id.to_string()).into());
        }

        state.children[position] = child.clone();
        debug!("Updated child {} ({} records)", child.id, child.record_count());
        Ok(())
    }

    fn delete_child(&self, child_id: &str) -> Result<bool> {
        let mut state = self.lock()?;

        let before = state.children.len();
        state.children.retain(|child| child.id != child_id);
        Ok(state.children.len() < before)
    }
}

impl HospitalStorage for MemoryStorage {
    fn store_hospital(&self, hospital: &Hospital) -> Result<()> {
        let mut state = self.lock()?;

        if let Some(id) = state.conflicting_id(&[hospital.id.as_str()], None) {
            return Err(StorageError::DuplicateId(id.to_string()).into());
        }

        state.hospitals.push(hospital.clone());
        debug!("Stored hospital {}", hospital.id);
        Ok(())
    }

    fn get_hospital(&self, hospital_id: &str) -> Result<Option<Hospital>> {
        let state = self.lock()?;
        Ok(state.hospitals.iter().find(|hospital| hospital.id == hospital_id).cloned())
    }

    fn list_hospitals(&self) -> Result<Vec<Hospital>> {
        let state = self.lock()?;
        Ok(state.hospitals.clone())
    }

    fn update_hospital(&self, hospital: &Hospital) -> Result<()> {
        let mut state = self.lock()?;

        let existing = state
            .hospitals
            .iter_mut()
            .find(|existing| existing.id == hospital.id)
            .ok_or_else(|| StorageError::NotFound(hospital.id.clone()))?;

        *existing = hospital.clone();
        Ok(())
    }
}
