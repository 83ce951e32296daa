//! Domain model for a hospital or clinic in the location picker.

use serde::{Deserialize, Serialize};
use shared::{generate_id, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Distance from the family in miles
    pub distance: f64,
    pub is_favorite: bool,
}

impl Hospital {
    pub fn new(
        name: &str,
        address: &str,
        city: &str,
        state: &str,
        zip_code: &str,
        distance: f64,
        is_favorite: bool,
    ) -> Result<Self, HospitalValidationError> {
        if name.trim().is_empty() {
            return Err(HospitalValidationError::EmptyName);
        }
        if !distance.is_finite() {
            return Err(HospitalValidationError::InvalidDistance);
        }
        if distance < 0.0 {
            return Err(HospitalValidationError::NegativeDistance);
        }

        Ok(Self {
            id: generate_id(RecordKind::Hospital),
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            zip_code: zip_code.trim().to_string(),
            distance,
            is_favorite,
        })
    }

    /// Single-line address, e.g. "4800 Sand Point Way NE, Seattle, WA 98105"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip_code)
    }

    /// Distance label, e.g. "0.8 mi"
    pub fn distance_label(&self) -> String {
        format!("{:.1} mi", self.distance)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HospitalValidationError {
    #[error("Hospital name cannot be empty")]
    EmptyName,
    #[error("Distance cannot be negative")]
    NegativeDistance,
    #[error("Distance must be a finite number")]
    InvalidDistance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hospital() {
        let hospital = Hospital::new("Seattle Children's Hospital", "4800 Sand Point Way NE", "Seattle", "WA", "98105", 2.1, true).unwrap();
        assert_eq!(hospital.full_address(), "4800 Sand Point Way NE, Seattle, WA 98105");
        assert_eq!(hospital.distance_label(), "2.1 mi");
        assert!(hospital.id.starts_with("hospital::"));
    }

    #[test]
    fn test_distance_validation() {
        assert_eq!(
            Hospital::new("Clinic", "", "", "", "", -0.5, false).unwrap_err(),
            HospitalValidationError::NegativeDistance
        );
        assert_eq!(
            Hospital::new("Clinic", "", "", "", "", f64::NAN, false).unwrap_err(),
            HospitalValidationError::InvalidDistance
        );
        assert_eq!(
            Hospital::new(" ", "", "", "", "", 1.0, false).unwrap_err(),
            HospitalValidationError::EmptyName
        );
        assert!(Hospital::new("Clinic", "", "", "", "", 0.0, false).is_ok());
    }
}
