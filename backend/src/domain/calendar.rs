//! Calendar domain logic for the wellness tracker.
//!
//! This module contains all business logic related to the month grid:
//! leading padding, day counts, month navigation and per-day highlighting.
//! The UI should only tile the produced cells in rows of seven.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};
use shared::{CalendarDay, CalendarDayType, CalendarMonth, DayClassification};

use crate::domain::schedule::EventsIndex;

/// First column of the month grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column of a weekday in the grid (0 = first column)
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService {
    week_start: WeekStart,
}

impl CalendarService {
    pub fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Grid cells for the month containing `month_anchor`.
    ///
    /// Leading `None`s pad the first day under its weekday column. Trailing
    /// cells are not padded.
    pub fn days_in_month(&self, month_anchor: NaiveDate) -> Vec<Option<NaiveDate>> {
        let first_day = first_of_month(month_anchor);
        let day_count = self.day_count(first_day.year(), first_day.month());
        let leading_blanks = self.week_start.column_of(first_day.weekday());

        debug!(
            "Calendar grid for {}-{:02}: {} leading blanks, {} days",
            first_day.year(),
            first_day.month(),
            leading_blanks,
            day_count
        );

        let mut cells = Vec::with_capacity((leading_blanks + day_count) as usize);
        cells.extend(std::iter::repeat(None).take(leading_blanks as usize));
        cells.extend(first_day.iter_days().take(day_count as usize).map(Some));
        cells
    }

    /// Number of padding cells before the first day of the month
    pub fn leading_blanks(&self, month_anchor: NaiveDate) -> u32 {
        self.week_start.column_of(first_of_month(month_anchor).weekday())
    }

    /// Get the number of days in a given month and year
    pub fn day_count(&self, year: i32, month: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Highlighting for a single day. Time of day plays no part.
    pub fn classify(
        &self,
        date: NaiveDate,
        selected_date: NaiveDate,
        today: NaiveDate,
        events_index: &EventsIndex,
    ) -> DayClassification {
        DayClassification {
            is_selected: date == selected_date,
            is_today: date == today,
            has_events: events_index.has_events(date),
        }
    }

    /// Generate the full month view with classification for every real day
    pub fn generate_calendar_month(
        &self,
        month_anchor: NaiveDate,
        selected_date: NaiveDate,
        today: NaiveDate,
        events_index: &EventsIndex,
    ) -> CalendarMonth {
        let first_day = first_of_month(month_anchor);
        let cells = self.days_in_month(first_day);

        let days: Vec<CalendarDay> = cells
            .into_iter()
            .map(|cell| match cell {
                Some(date) => CalendarDay {
                    date: Some(date),
                    day: date.day(),
                    day_type: CalendarDayType::MonthDay,
                    classification: self.classify(date, selected_date, today, events_index),
                    event_count: events_index.event_count(date),
                },
                None => CalendarDay {
                    date: None,
                    day: 0,
                    day_type: CalendarDayType::PaddingBefore,
                    classification: DayClassification::default(),
                    event_count: 0,
                },
            })
            .collect();

        CalendarMonth {
            month: first_day.month(),
            year: first_day.year(),
            title: self.month_title(first_day),
            weekday_headers: self.weekday_headers(),
            leading_blanks: self.leading_blanks(first_day),
            days,
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// e.g. "February 2024"
    pub fn month_title(&self, month_anchor: NaiveDate) -> String {
        format!("{} {}", self.month_name(month_anchor.month()), month_anchor.year())
    }

    /// Single letter column headers starting at the configured week start
    pub fn weekday_headers(&self) -> Vec<String> {
        let headers = ["S", "M", "T", "W", "T", "F", "S"];
        let offset = match self.week_start {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        };
        (0..7).map(|i| headers[(i + offset) % 7].to_string()).collect()
    }

    /// "Today" for today, otherwise abbreviated weekday and day, e.g. "Thu 15"
    pub fn selected_date_label(&self, selected_date: NaiveDate, today: NaiveDate) -> String {
        if selected_date == today {
            "Today".to_string()
        } else {
            selected_date.format("%a %-d").to_string()
        }
    }

    /// First day of the previous month
    pub fn previous_month(&self, month_anchor: NaiveDate) -> NaiveDate {
        let (month, year) = if month_anchor.month() == 1 {
            (12, month_anchor.year() - 1)
        } else {
            (month_anchor.month() - 1, month_anchor.year())
        };
        // Only fails past the end of chrono's date range
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| first_of_month(month_anchor))
    }

    /// First day of the next month
    pub fn next_month(&self, month_anchor: NaiveDate) -> NaiveDate {
        let (month, year) = if month_anchor.month() == 12 {
            (1, month_anchor.year() + 1)
        } else {
            (month_anchor.month() + 1, month_anchor.year())
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| first_of_month(month_anchor))
    }
}

/// First calendar day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}
