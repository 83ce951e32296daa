use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Palette used by event dots, icons and child avatars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Orange,
    Blue,
    Red,
    Gray,
    Green,
    Purple,
}

impl ThemeColor {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeColor::Orange => "orange",
            ThemeColor::Blue => "blue",
            ThemeColor::Red => "red",
            ThemeColor::Gray => "gray",
            ThemeColor::Green => "green",
            ThemeColor::Purple => "purple",
        }
    }
}

/// Kind of a scheduled item, used to pick its color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Medication,
    Checkup,
    Vaccination,
    Other,
}

/// Presentation tag for an event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventStyle {
    pub color: ThemeColor,
    pub icon: &'static str,
}

/// Style lookup table, one row per event type
const EVENT_STYLES: [(EventType, EventStyle); 4] = [
    (EventType::Medication, EventStyle { color: ThemeColor::Orange, icon: "pills" }),
    (EventType::Checkup, EventStyle { color: ThemeColor::Blue, icon: "stethoscope" }),
    (EventType::Vaccination, EventStyle { color: ThemeColor::Red, icon: "syringe" }),
    (EventType::Other, EventStyle { color: ThemeColor::Gray, icon: "calendar" }),
];

impl EventType {
    /// Look up the color and icon for this event type
    pub fn style(&self) -> EventStyle {
        EVENT_STYLES
            .iter()
            .find(|(event_type, _)| event_type == self)
            .map(|(_, style)| *style)
            .unwrap_or(EventStyle { color: ThemeColor::Gray, icon: "calendar" })
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Medication => "medication",
            EventType::Checkup => "checkup",
            EventType::Vaccination => "vaccination",
            EventType::Other => "other",
        }
    }
}

/// A display row derived from a medication dose, appointment or vaccination.
///
/// Schedule events are recomputed on every query and are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// ID of the source record; medication doses add a "#<dose index>" suffix
    pub id: String,
    /// Time of day label, e.g. "8:00 AM"
    pub time: String,
    pub title: String,
    /// Relative day label, e.g. "Today", "Tomorrow", "Thu 15"
    pub day: String,
    pub event_type: EventType,
    pub is_missed: bool,
    /// Source timestamp, used for ordering
    pub scheduled_at: NaiveDateTime,
}

/// A day's events split into missed and upcoming, both in schedule order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub missed: Vec<ScheduleEvent>,
    pub upcoming: Vec<ScheduleEvent>,
}

impl DaySchedule {
    pub fn len(&self) -> usize {
        self.missed.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missed.is_empty() && self.upcoming.is_empty()
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// How a single calendar day should be highlighted
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayClassification {
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
}

/// Represents a single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// None for padding cells
    pub date: Option<NaiveDate>,
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub day_type: CalendarDayType,
    pub classification: DayClassification,
    pub event_count: usize,
}

/// Represents a calendar month ready to be tiled in rows of seven
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "February 2024"
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub days: Vec<CalendarDay>,
    pub leading_blanks: u32,
}

/// One column of the home screen week strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// Abbreviated weekday, e.g. "Mon"
    pub weekday: String,
    pub day_number: u32,
    pub is_selected: bool,
    /// One dot per event on that day, in schedule order
    pub event_colors: Vec<ThemeColor>,
}

/// Figures shown on the home screen cards
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HomeSummary {
    pub child_name: String,
    /// Whole days until the next appointment, None when nothing is booked
    pub next_appointment_in_days: Option<i64>,
    /// e.g. "3 days", "Tomorrow", "Today"
    pub next_appointment_label: Option<String>,
    pub medications_due_today: u32,
    pub overdue_vaccinations: u32,
}

/// Kind of appointment offered by the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    Checkup,
    Specialist,
    Dental,
    Vaccination,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::Checkup,
        AppointmentType::Specialist,
        AppointmentType::Dental,
        AppointmentType::Vaccination,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "Checkup",
            AppointmentType::Specialist => "Specialist",
            AppointmentType::Dental => "Dental",
            AppointmentType::Vaccination => "Vaccination",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "Regular health checkup with a doctor.",
            AppointmentType::Specialist => "See a specialist for a particular issue.",
            AppointmentType::Dental => "Meet with a dentist or orthodontist.",
            AppointmentType::Vaccination => "Get vaccinated.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "stethoscope",
            AppointmentType::Specialist => "person.fill",
            AppointmentType::Dental => "tooth",
            AppointmentType::Vaccination => "syringe",
        }
    }

    pub fn color(&self) -> ThemeColor {
        match self {
            AppointmentType::Checkup => ThemeColor::Blue,
            AppointmentType::Specialist => ThemeColor::Purple,
            AppointmentType::Dental => ThemeColor::Red,
            AppointmentType::Vaccination => ThemeColor::Green,
        }
    }
}

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Records,
    Medicine,
    Forums,
}

/// Kind prefix used in record IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Child,
    Medication,
    Appointment,
    Vaccination,
    Hospital,
}

impl RecordKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Child => "child",
            RecordKind::Medication => "medication",
            RecordKind::Appointment => "appointment",
            RecordKind::Vaccination => "vaccination",
            RecordKind::Hospital => "hospital",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "child" => Some(RecordKind::Child),
            "medication" => Some(RecordKind::Medication),
            "appointment" => Some(RecordKind::Appointment),
            "vaccination" => Some(RecordKind::Vaccination),
            "hospital" => Some(RecordKind::Hospital),
            _ => None,
        }
    }
}

/// Generate a record ID in format "<kind>::<uuid>"
pub fn generate_id(kind: RecordKind) -> String {
    format!("{}::{}", kind.prefix(), Uuid::new_v4())
}

/// Parse a record ID into its kind and UUID
pub fn parse_id(id: &str) -> Result<(RecordKind, Uuid), RecordIdError> {
    let parts: Vec<&str> = id.split("::").collect();
    if parts.len() != 2 {
        return Err(RecordIdError::InvalidFormat);
    }

    let kind = RecordKind::from_prefix(parts[0]).ok_or(RecordIdError::UnknownKind)?;
    let uuid = Uuid::parse_str(parts[1]).map_err(|_| RecordIdError::InvalidUuid)?;

    Ok((kind, uuid))
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordIdError {
    InvalidFormat,
    UnknownKind,
    InvalidUuid,
}

impl fmt::Display for RecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIdError::InvalidFormat => write!(f, "Invalid record ID format"),
            RecordIdError::UnknownKind => write!(f, "Unknown record kind in ID"),
            RecordIdError::InvalidUuid => write!(f, "Invalid UUID in record ID"),
        }
    }
}

impl std::error::Error for RecordIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_style_lookup() {
        assert_eq!(EventType::Medication.style(), EventStyle { color: ThemeColor::Orange, icon: "pills" });
        assert_eq!(EventType::Checkup.style(), EventStyle { color: ThemeColor::Blue, icon: "stethoscope" });
        assert_eq!(EventType::Vaccination.style(), EventStyle { color: ThemeColor::Red, icon: "syringe" });
        assert_eq!(EventType::Other.style(), EventStyle { color: ThemeColor::Gray, icon: "calendar" });
    }

    #[test]
    fn test_generate_and_parse_id() {
        let id = generate_id(RecordKind::Medication);
        assert!(id.starts_with("medication::"));

        let (kind, _) = parse_id(&id).unwrap();
        assert_eq!(kind, RecordKind::Medication);

        // Two generated IDs never collide
        assert_ne!(generate_id(RecordKind::Child), generate_id(RecordKind::Child));
    }

    #[test]
    fn test_parse_id_errors() {
        assert_eq!(parse_id("child").unwrap_err(), RecordIdError::InvalidFormat);
        assert_eq!(parse_id("child::a::b").unwrap_err(), RecordIdError::InvalidFormat);
        assert_eq!(
            parse_id("pet::67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap_err(),
            RecordIdError::UnknownKind
        );
        assert_eq!(parse_id("child::not-a-uuid").unwrap_err(), RecordIdError::InvalidUuid);
    }

    #[test]
    fn test_appointment_type_catalog() {
        assert_eq!(AppointmentType::ALL.len(), 4);
        assert_eq!(AppointmentType::Dental.icon(), "tooth");
        assert_eq!(AppointmentType::Specialist.color(), ThemeColor::Purple);
        assert_eq!(AppointmentType::Vaccination.description(), "Get vaccinated.");
    }

    #[test]
    fn test_day_schedule_len() {
        let schedule = DaySchedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
    }

    #[test]
    fn test_event_type_serializes_lowercase() {
        let json = serde_json::to_string(&EventType::Vaccination).unwrap();
        assert_eq!(json, "\"vaccination\"");
    }
}
