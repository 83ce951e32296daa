//! Appointment booking: pick a type, then a location, then a date and time.
//!
//! The chosen slot must be one of [`TIME_SLOTS`] and the resulting date and
//! time must not already have passed. The booked appointment is attached to
//! the child through [`ChildService`].

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use log::info;
use shared::AppointmentType;
use std::sync::Arc;

use crate::domain::child_service::ChildService;
use crate::domain::commands::booking::{BookAppointmentCommand, BookAppointmentResult};
use crate::domain::commands::child::AddAppointmentCommand;
use crate::storage::traits::{ChildStorage, HospitalStorage};

/// Slots offered on every bookable day
pub const TIME_SLOTS: [&str; 8] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "11:00 AM", "12:00 PM", "12:45 PM", "1:00 PM", "1:45 PM",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),
    #[error("Cannot book an appointment in the past")]
    DateInPast,
    #[error("Hospital not found: {0}")]
    HospitalNotFound(String),
}

pub struct BookingService<S: ChildStorage + HospitalStorage> {
    storage: Arc<S>,
    children: ChildService<S>,
}

impl<S: ChildStorage + HospitalStorage> BookingService<S> {
    pub fn new(storage: Arc<S>, children: ChildService<S>) -> Self {
        Self { storage, children }
    }

    pub fn appointment_types(&self) -> &'static [AppointmentType] {
        &AppointmentType::ALL
    }

    pub fn available_time_slots(&self) -> &'static [&'static str] {
        &TIME_SLOTS
    }

    pub fn book_appointment(&self, command: BookAppointmentCommand, now: NaiveDateTime) -> Result<BookAppointmentResult> {
        info!(
            "Booking {} appointment for child {} at {} on {} {}",
            command.appointment_type.label(),
            command.child_id,
            command.hospital_id,
            command.date,
            command.time_slot
        );

        let slot = parse_time_slot(&command.time_slot)?;
        let date_time = command.date.and_time(slot);
        if date_time < now {
            return Err(BookingValidationError::DateInPast.into());
        }

        let hospital = self
            .storage
            .get_hospital(&command.hospital_id)?
            .ok_or_else(|| BookingValidationError::HospitalNotFound(command.hospital_id.clone()))?;

        let title = format!("{} Appointment", command.appointment_type.label());
        let appointment = self
            .children
            .add_appointment(AddAppointmentCommand {
                child_id: command.child_id.clone(),
                title,
                date_time,
                location: hospital.name.clone(),
                doctor: String::new(),
                notes: command.notes,
            })
            .with_context(|| format!("Failed to book appointment for child {}", command.child_id))?;

        let success_message = format!(
            "{} booked at {} for {}",
            appointment.title,
            hospital.name,
            date_time.format("%b %-d, %-I:%M %p")
        );
        info!("{}", success_message);

        Ok(BookAppointmentResult {
            appointment,
            success_message,
        })
    }
}

/// Parse one of the offered slot labels into a time of day
fn parse_time_slot(slot: &str) -> Result<NaiveTime, BookingValidationError> {
    let slot = slot.trim();
    if !TIME_SLOTS.contains(&slot) {
        return Err(BookingValidationError::UnknownTimeSlot(slot.to_string()));
    }

    NaiveTime::parse_from_str(slot, "%I:%M %p")
        .map_err(|_| BookingValidationError::UnknownTimeSlot(slot.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::commands::child::CreateChildCommand;
    use crate::domain::commands::hospital::RegisterHospitalCommand;
    use crate::domain::hospital_service::HospitalService;
    use crate::domain::models::{Child, Hospital};
    use crate::storage::MemoryStorage;
    use chrono::{Duration, NaiveDate};
    use shared::ThemeColor;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap().and_hms_opt(10, 15, 0).unwrap()
    }

    struct Fixture {
        booking: BookingService<MemoryStorage>,
        children: ChildService<MemoryStorage>,
        child: Child,
        hospital: Hospital,
    }

    fn setup_test() -> Fixture {
        let storage = Arc::new(MemoryStorage::new());
        let children = ChildService::new(Arc::clone(&storage), Arc::new(FixedClock::new(now())));
        let hospitals = HospitalService::new(Arc::clone(&storage));

        let child = children
            .create_child(CreateChildCommand {
                name: "Emma".to_string(),
                birth_date: "2019-05-01".to_string(),
                color: ThemeColor::Blue,
            })
            .unwrap();
        let hospital = hospitals
            .register_hospital(RegisterHospitalCommand {
                name: "Seattle Children's Hospital".to_string(),
                address: "4800 Sand Point Way NE".to_string(),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                zip_code: "98105".to_string(),
                distance: 2.1,
                is_favorite: true,
            })
            .unwrap();

        Fixture {
            booking: BookingService::new(storage, children.clone()),
            children,
            child,
            hospital,
        }
    }

    fn command(fixture: &Fixture, date: NaiveDate, slot: &str) -> BookAppointmentCommand {
        BookAppointmentCommand {
            child_id: fixture.child.id.clone(),
            appointment_type: AppointmentType::Dental,
            hospital_id: fixture.hospital.id.clone(),
            date,
            time_slot: slot.to_string(),
            notes: "Bring insurance card".to_string(),
        }
    }

    #[test]
    fn test_time_slots() {
        let fixture = setup_test();
        let slots = fixture.booking.available_time_slots();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0], "9:00 AM");
        assert_eq!(slots[7], "1:45 PM");

        assert_eq!(parse_time_slot("12:45 PM").unwrap(), NaiveTime::from_hms_opt(12, 45, 0).unwrap());
        assert_eq!(parse_time_slot("1:00 PM").unwrap(), NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(
            parse_time_slot("2:00 PM").unwrap_err(),
            BookingValidationError::UnknownTimeSlot("2:00 PM".to_string())
        );
    }

    #[test]
    fn test_book_appointment() {
        let fixture = setup_test();
        let date = now().date() + Duration::days(2);

        let result = fixture.booking.book_appointment(command(&fixture, date, "9:30 AM"), now()).unwrap();
        assert_eq!(result.appointment.title, "Dental Appointment");
        assert_eq!(result.appointment.location, "Seattle Children's Hospital");
        assert_eq!(result.appointment.date_time, date.and_hms_opt(9, 30, 0).unwrap());
        assert_eq!(result.success_message, "Dental Appointment booked at Seattle Children's Hospital for May 16, 9:30 AM");

        let stored = fixture.children.get_child(&fixture.child.id).unwrap().unwrap();
        assert_eq!(stored.appointments.len(), 1);
        assert_eq!(stored.appointments[0].notes, "Bring insurance card");
    }

    #[test]
    fn test_book_later_today() {
        let fixture = setup_test();
        assert!(fixture.booking.book_appointment(command(&fixture, now().date(), "11:00 AM"), now()).is_ok());

        // 10:00 AM has already passed at 10:15
        let err = fixture
            .booking
            .book_appointment(command(&fixture, now().date(), "10:00 AM"), now())
            .unwrap_err();
        assert_eq!(err.downcast_ref::<BookingValidationError>(), Some(&BookingValidationError::DateInPast));
    }

    #[test]
    fn test_booking_validation() {
        let fixture = setup_test();
        let tomorrow = now().date() + Duration::days(1);

        let err = fixture
            .booking
            .book_appointment(command(&fixture, now().date() - Duration::days(1), "9:00 AM"), now())
            .unwrap_err();
        assert_eq!(err.downcast_ref::<BookingValidationError>(), Some(&BookingValidationError::DateInPast));

        assert!(fixture.booking.book_appointment(command(&fixture, tomorrow, "3:15 PM"), now()).is_err());

        let mut unknown_hospital = command(&fixture, tomorrow, "9:00 AM");
        unknown_hospital.hospital_id = "hospital::missing".to_string();
        let err = fixture.booking.book_appointment(unknown_hospital, now()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BookingValidationError>(),
            Some(&BookingValidationError::HospitalNotFound("hospital::missing".to_string()))
        );

        let mut unknown_child = command(&fixture, tomorrow, "9:00 AM");
        unknown_child.child_id = "child::missing".to_string();
        assert!(fixture.booking.book_appointment(unknown_child, now()).is_err());

        let stored = fixture.children.get_child(&fixture.child.id).unwrap().unwrap();
        assert!(stored.appointments.is_empty());
    }
}
