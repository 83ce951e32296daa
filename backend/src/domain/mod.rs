//! # Domain Layer
//!
//! Business logic for the wellness tracker. Calendar and schedule
//! computations are pure functions of their inputs plus an injected `now`;
//! the services that mutate state go through the storage traits.

pub mod booking;
pub mod calendar;
pub mod child_service;
pub mod clock;
pub mod commands;
pub mod hospital_service;
pub mod models;
pub mod schedule;
pub mod selection;

pub use booking::{BookingService, BookingValidationError};
pub use calendar::{CalendarService, WeekStart};
pub use child_service::ChildService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use hospital_service::HospitalService;
pub use schedule::{EventsIndex, ScheduleService};
pub use selection::SelectionState;
