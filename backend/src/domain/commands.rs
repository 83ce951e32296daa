//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer. A front-end
//! maps its own input forms to these types before calling a service.

pub mod child {
    use chrono::NaiveDateTime;
    use shared::ThemeColor;

    /// Input for creating a new child.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
        /// ISO 8601 date (YYYY-MM-DD)
        pub birth_date: String,
        pub color: ThemeColor,
    }

    /// Input for adding a medication course to a child.
    #[derive(Debug, Clone)]
    pub struct AddMedicationCommand {
        pub child_id: String,
        pub name: String,
        pub dosage: String,
        pub schedule: Vec<NaiveDateTime>,
        pub instructions: String,
    }

    /// Input for adding an appointment to a child.
    #[derive(Debug, Clone)]
    pub struct AddAppointmentCommand {
        pub child_id: String,
        pub title: String,
        pub date_time: NaiveDateTime,
        pub location: String,
        pub doctor: String,
        pub notes: String,
    }

    /// Input for adding a vaccination record to a child.
    #[derive(Debug, Clone)]
    pub struct AddVaccinationCommand {
        pub child_id: String,
        pub name: String,
        pub administered_at: NaiveDateTime,
        pub due_date: NaiveDateTime,
        pub notes: String,
    }

    /// Marks a medication or vaccination as done or not done.
    #[derive(Debug, Clone)]
    pub struct SetCompletionCommand {
        pub child_id: String,
        pub record_id: String,
        pub is_completed: bool,
    }

    /// Result of deleting a child.
    #[derive(Debug, Clone)]
    pub struct DeleteChildResult {
        /// Medications, appointments and vaccinations removed with the child
        pub removed_records: usize,
        pub success_message: String,
    }
}

pub mod hospital {
    /// Input for adding a hospital to the directory.
    #[derive(Debug, Clone)]
    pub struct RegisterHospitalCommand {
        pub name: String,
        pub address: String,
        pub city: String,
        pub state: String,
        pub zip_code: String,
        pub distance: f64,
        pub is_favorite: bool,
    }
}

pub mod booking {
    use chrono::NaiveDate;
    use shared::AppointmentType;

    use crate::domain::models::Appointment;

    /// The three choices made in the booking flow: type, location, date and time.
    #[derive(Debug, Clone)]
    pub struct BookAppointmentCommand {
        pub child_id: String,
        pub appointment_type: AppointmentType,
        pub hospital_id: String,
        pub date: NaiveDate,
        /// One of the offered slots, e.g. "9:30 AM"
        pub time_slot: String,
        pub notes: String,
    }

    /// Result of booking an appointment.
    #[derive(Debug, Clone)]
    pub struct BookAppointmentResult {
        pub appointment: Appointment,
        pub success_message: String,
    }
}
