//! # Storage Module
//!
//! Storage abstractions and the in-memory store used by the domain services.
//! A durable backend would implement the same traits.

pub mod memory;
pub mod sample_data;
pub mod traits;

pub use memory::MemoryStorage;
pub use traits::{ChildStorage, HospitalStorage, StorageError};
