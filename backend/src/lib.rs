//! # Wellness Tracker Backend
//!
//! Synchronous services for the child wellness tracker: month grid, daily
//! schedule, children and their records, hospitals and booking. `Backend`
//! wires every service to one shared in-memory store and clock.

use anyhow::Result;
use chrono::Duration;
use log::{debug, info};
use shared::{CalendarMonth, DaySchedule, HomeSummary, WeekDay};
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod storage;

pub use config::TrackerConfig;
pub use storage::MemoryStorage;

use domain::calendar::first_of_month;
use domain::models::Child;
use domain::{
    BookingService, CalendarService, ChildService, Clock, HospitalService, ScheduleService, SelectionState,
};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub config: TrackerConfig,
    pub child_service: ChildService<MemoryStorage>,
    pub hospital_service: HospitalService<MemoryStorage>,
    pub booking_service: BookingService<MemoryStorage>,
    pub calendar_service: CalendarService,
    pub schedule_service: ScheduleService,
    clock: Arc<dyn Clock>,
}

impl Backend {
    /// Create a backend over a fresh in-memory store, seeding it when the config asks for sample data
    pub fn new(config: TrackerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let storage = Arc::new(MemoryStorage::new());
        if config.load_sample_data {
            crate::storage::sample_data::load_sample_data(storage.as_ref(), clock.now())?;
        }

        let child_service = ChildService::new(Arc::clone(&storage), Arc::clone(&clock));
        let hospital_service = HospitalService::new(Arc::clone(&storage));
        let booking_service = BookingService::new(Arc::clone(&storage), child_service.clone());

        info!(
            "Backend ready: week_start={:?}, upcoming_window_days={}",
            config.week_start, config.upcoming_window_days
        );

        Ok(Backend {
            calendar_service: CalendarService::new(config.week_start),
            schedule_service: ScheduleService::new(config.upcoming_window_days),
            child_service,
            hospital_service,
            booking_service,
            config,
            clock,
        })
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Fresh selection on the first child and today
    pub fn initial_selection(&self) -> SelectionState {
        SelectionState::new(self.clock.today())
    }

    /// The child the selection points at, if any
    pub fn selected_child(&self, selection: &SelectionState) -> Result<Option<Child>> {
        let children = self.child_service.list_children()?;
        Ok(selection.selected_child(&children).cloned())
    }

    /// Month grid for the focused month, with the selected child's event markers
    pub fn calendar_month(&self, selection: &SelectionState) -> Result<CalendarMonth> {
        let now = self.clock.now();
        let month_start = first_of_month(selection.focused_month());
        let month_end = self.calendar_service.next_month(month_start) - Duration::days(1);

        let index = match self.selected_child(selection)? {
            Some(child) => self.schedule_service.events_index(&child, month_start, month_end, now),
            None => Default::default(),
        };

        Ok(self
            .calendar_service
            .generate_calendar_month(month_start, selection.selected_date(), now.date(), &index))
    }

    /// Missed and upcoming events on the selected date; empty without a child
    pub fn day_schedule(&self, selection: &SelectionState) -> Result<DaySchedule> {
        let Some(child) = self.selected_child(selection)? else {
            debug!("No child at index {}, empty schedule", selection.child_index());
            return Ok(DaySchedule::default());
        };

        Ok(self
            .schedule_service
            .day_schedule(&child, selection.selected_date(), self.clock.now()))
    }

    pub fn home_summary(&self, selection: &SelectionState) -> Result<Option<HomeSummary>> {
        Ok(self
            .selected_child(selection)?
            .map(|child| self.schedule_service.home_summary(&child, self.clock.now())))
    }

    /// Week strip around the selected date; empty without a child
    pub fn week_strip(&self, selection: &SelectionState) -> Result<Vec<WeekDay>> {
        let Some(child) = self.selected_child(selection)? else {
            return Ok(Vec::new());
        };

        Ok(self.schedule_service.week_strip(
            &child,
            self.config.week_start,
            selection.selected_date(),
            selection.selected_date(),
            self.clock.now(),
        ))
    }
}
