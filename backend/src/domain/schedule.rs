//! Schedule derivation for a child's medications, appointments and vaccinations.
//!
//! Every `ScheduleEvent` is computed on demand from the child's records and
//! the injected `now`. Nothing here is stored, so results can never go stale.
//!
//! ## Missed rule
//!
//! An event is missed when its timestamp is before `now` and its source
//! record is not completed. Appointments carry no completion flag and are
//! never missed.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use log::debug;
use shared::{DaySchedule, EventType, HomeSummary, ScheduleEvent, WeekDay};
use std::collections::BTreeMap;

use crate::domain::calendar::WeekStart;
use crate::domain::models::{Child, Vaccination};

/// Events grouped by calendar day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsIndex {
    by_day: BTreeMap<NaiveDate, Vec<ScheduleEvent>>,
}

impl EventsIndex {
    pub fn insert(&mut self, event: ScheduleEvent) {
        self.by_day
            .entry(event.scheduled_at.date())
            .or_default()
            .push(event);
    }

    pub fn events_on(&self, day: NaiveDate) -> &[ScheduleEvent] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_events(&self, day: NaiveDate) -> bool {
        !self.events_on(day).is_empty()
    }

    pub fn event_count(&self, day: NaiveDate) -> usize {
        self.events_on(day).len()
    }

    /// Days with at least one event, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

/// Derives and partitions schedule events
#[derive(Debug, Clone)]
pub struct ScheduleService {
    /// How far ahead the home summary looks for the next appointment
    upcoming_window_days: i64,
}

impl ScheduleService {
    pub fn new(upcoming_window_days: u32) -> Self {
        Self {
            upcoming_window_days: i64::from(upcoming_window_days),
        }
    }

    /// All of the child's events on `day`, ascending by time.
    ///
    /// Ties keep record order: medications, then appointments, then
    /// vaccinations, each in collection order.
    pub fn events_for_day(&self, child: &Child, day: NaiveDate, now: NaiveDateTime) -> Vec<ScheduleEvent> {
        let today = now.date();
        let mut events = Vec::new();

        for medication in &child.medications {
            for (dose_index, dose) in medication.schedule.iter().enumerate() {
                if dose.date() != day {
                    continue;
                }
                events.push(ScheduleEvent {
                    id: format!("{}#{}", medication.id, dose_index),
                    time: time_label(*dose),
                    title: medication.display_title(),
                    day: day_label(day, today),
                    event_type: EventType::Medication,
                    is_missed: *dose < now && !medication.is_completed,
                    scheduled_at: *dose,
                });
            }
        }

        for appointment in &child.appointments {
            if appointment.date_time.date() != day {
                continue;
            }
            events.push(ScheduleEvent {
                id: appointment.id.clone(),
                time: time_label(appointment.date_time),
                title: appointment.title.clone(),
                day: day_label(day, today),
                event_type: EventType::Checkup,
                is_missed: false,
                scheduled_at: appointment.date_time,
            });
        }

        for vaccination in &child.vaccinations {
            if vaccination.due_date.date() != day {
                continue;
            }
            let is_overdue = vaccination.is_overdue(now);
            let title = if is_overdue {
                format!("{} Overdue", vaccination.name)
            } else {
                vaccination.name.clone()
            };
            events.push(ScheduleEvent {
                id: vaccination.id.clone(),
                time: time_label(vaccination.due_date),
                title,
                day: day_label(day, today),
                event_type: EventType::Vaccination,
                is_missed: is_overdue,
                scheduled_at: vaccination.due_date,
            });
        }

        // Stable sort keeps record order for equal timestamps
        events.sort_by_key(|event| event.scheduled_at);

        debug!("Derived {} events for child {} on {}", events.len(), child.id, day);

        events
    }

    /// Split events into missed and upcoming, preserving relative order
    pub fn partition(&self, events: Vec<ScheduleEvent>) -> DaySchedule {
        let (missed, upcoming): (Vec<ScheduleEvent>, Vec<ScheduleEvent>) =
            events.into_iter().partition(|event| event.is_missed);
        DaySchedule { missed, upcoming }
    }

    pub fn day_schedule(&self, child: &Child, day: NaiveDate, now: NaiveDateTime) -> DaySchedule {
        self.partition(self.events_for_day(child, day, now))
    }

    /// Index of the child's events for every day in `from..=to`
    pub fn events_index(&self, child: &Child, from: NaiveDate, to: NaiveDate, now: NaiveDateTime) -> EventsIndex {
        let mut index = EventsIndex::default();
        if to < from {
            return index;
        }

        for day in from.iter_days().take_while(|day| *day <= to) {
            for event in self.events_for_day(child, day, now) {
                index.insert(event);
            }
        }

        index
    }

    /// Vaccinations that are still open past their due date
    pub fn overdue_vaccinations<'a>(&self, child: &'a Child, now: NaiveDateTime) -> Vec<&'a Vaccination> {
        child
            .vaccinations
            .iter()
            .filter(|vaccination| vaccination.is_overdue(now))
            .collect()
    }

    /// Seven days of the week containing `containing`, with one dot per event
    pub fn week_strip(
        &self,
        child: &Child,
        week_start: WeekStart,
        containing: NaiveDate,
        selected: NaiveDate,
        now: NaiveDateTime,
    ) -> Vec<WeekDay> {
        let offset = week_start.column_of(containing.weekday());
        let first_day = containing - Duration::days(i64::from(offset));

        first_day
            .iter_days()
            .take(7)
            .map(|date| WeekDay {
                date,
                weekday: date.format("%a").to_string(),
                day_number: date.day(),
                is_selected: date == selected,
                event_colors: self
                    .events_for_day(child, date, now)
                    .iter()
                    .map(|event| event.event_type.style().color)
                    .collect(),
            })
            .collect()
    }

    /// Figures for the home screen cards
    pub fn home_summary(&self, child: &Child, now: NaiveDateTime) -> HomeSummary {
        let today = now.date();
        let window_end = now + Duration::days(self.upcoming_window_days);

        let next_appointment = child
            .appointments
            .iter()
            .filter(|appointment| appointment.date_time >= now && appointment.date_time <= window_end)
            .min_by_key(|appointment| appointment.date_time);

        let next_appointment_in_days = next_appointment.map(|appointment| (appointment.date_time.date() - today).num_days());

        let medications_due_today = child
            .medications
            .iter()
            .filter(|medication| !medication.is_completed)
            .map(|medication| medication.doses_on(today).count() as u32)
            .sum();

        HomeSummary {
            child_name: child.name.clone(),
            next_appointment_in_days,
            next_appointment_label: next_appointment_in_days.map(days_away_label),
            medications_due_today,
            overdue_vaccinations: self.overdue_vaccinations(child, now).len() as u32,
        }
    }
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new(30)
    }
}

/// Time of day, e.g. "8:00 AM"
pub fn time_label(timestamp: NaiveDateTime) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Day relative to today, e.g. "Today", "Tomorrow", "Thu 15"
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    match (day - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => day.format("%a %-d").to_string(),
    }
}

fn days_away_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("{} days", n),
    }
}
