//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::{Child, Hospital};

/// Conflicts reported by a storage backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Record ID already exists: {0}")]
    DuplicateId(String),
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Trait defining the interface for child storage operations.
///
/// A child is stored together with the records it owns. Implementations
/// must reject any record ID that is already used anywhere in the store.
pub trait ChildStorage: Send + Sync {
    /// Store a new child
    fn store_child(&self, child: &Child) -> Result<()>;

    /// Retrieve a specific child by ID
    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List all children in the order they were added
    fn list_children(&self) -> Result<Vec<Child>>;

    /// Replace an existing child and its records
    fn update_child(&self, child: &Child) -> Result<()>;

    /// Delete a child and every record it owns.
    /// Returns true if the child was found and deleted, false otherwise
    fn delete_child(&self, child_id: &str) -> Result<bool>;
}

/// Trait defining the interface for hospital storage operations
pub trait HospitalStorage: Send + Sync {
    fn store_hospital(&self, hospital: &Hospital) -> Result<()>;

    fn get_hospital(&self, hospital_id: &str) -> Result<Option<Hospital>>;

    /// List all hospitals in the order they were added
    fn list_hospitals(&self) -> Result<Vec<Hospital>>;

    fn update_hospital(&self, hospital: &Hospital) -> Result<()>;
}
