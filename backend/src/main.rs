//! Print a child's month grid and daily schedule
//!
//! Usage: wellness-tracker [--config PATH] [--child INDEX] [--date YYYY-MM-DD] [--json]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use shared::{CalendarMonth, DaySchedule, HomeSummary, ScheduleEvent, WeekDay};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wellness_tracker::domain::SystemClock;
use wellness_tracker::{Backend, TrackerConfig};

#[derive(Parser)]
#[command(name = "wellness-tracker", about = "Show a child's wellness calendar and schedule")]
struct Args {
    /// YAML config file (defaults apply when absent)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Index of the child to show, starting at 0
    #[arg(long, default_value_t = 0)]
    child: usize,

    /// Day to select instead of today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Print the views as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    child: Option<String>,
    summary: Option<HomeSummary>,
    week: Vec<WeekDay>,
    month: CalendarMonth,
    schedule: DaySchedule,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", value))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TrackerConfig::load(args.config.as_deref())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let backend = Backend::new(config, Arc::new(SystemClock)).context("Failed to start backend")?;

    let mut selection = backend.initial_selection();
    selection.select_child(args.child);
    if let Some(date) = args.date {
        selection.select_date(date);
    }

    let report = Report {
        child: backend.selected_child(&selection)?.map(|child| child.name),
        summary: backend.home_summary(&selection)?,
        week: backend.week_strip(&selection)?,
        month: backend.calendar_month(&selection)?,
        schedule: backend.day_schedule(&selection)?,
    };

    info!(
        "Showing {} for {}",
        report.child.as_deref().unwrap_or("no child"),
        selection.selected_date()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&backend, &report, selection.selected_date());
    }

    Ok(())
}

fn print_report(backend: &Backend, report: &Report, selected_date: NaiveDate) {
    match (&report.child, &report.summary) {
        (Some(name), Some(summary)) => {
            println!("{}", name);
            println!(
                "  Next appointment: {}",
                summary.next_appointment_label.as_deref().unwrap_or("none scheduled")
            );
            println!("  Medications due today: {}", summary.medications_due_today);
            println!("  Overdue vaccinations: {}", summary.overdue_vaccinations);
        }
        _ => println!("No child selected"),
    }
    println!();

    println!("{}", report.month.title);
    println!("{}", report.month.weekday_headers.iter().map(|h| format!("{:>4}", h)).collect::<String>());
    for week in report.month.days.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| match cell.date {
                None => "    ".to_string(),
                Some(_) => {
                    let marker = if cell.classification.is_selected {
                        '*'
                    } else if cell.classification.has_events {
                        '.'
                    } else {
                        ' '
                    };
                    format!("{:>3}{}", cell.day, marker)
                }
            })
            .collect();
        println!("{}", row.trim_end());
    }
    println!();

    let today = backend.clock().today();
    println!("{}", backend.calendar_service.selected_date_label(selected_date, today));
    if report.schedule.is_empty() {
        println!("  Nothing scheduled");
    }
    print_events("Missed", &report.schedule.missed);
    print_events("Upcoming", &report.schedule.upcoming);
}

fn print_events(heading: &str, events: &[ScheduleEvent]) {
    if events.is_empty() {
        return;
    }

    println!("  {}", heading);
    for event in events {
        let style = event.event_type.style();
        println!("    {:>8}  {} [{} {}]", event.time, event.title, style.icon, style.color.name());
    }
}
