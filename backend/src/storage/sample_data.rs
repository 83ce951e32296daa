//! Demo children and hospitals, laid out relative to the current time.

use anyhow::{Context, Result};
use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use log::info;
use shared::ThemeColor;

use super::traits::{ChildStorage, HospitalStorage};
use crate::domain::models::{Appointment, Child, Hospital, Medication, Vaccination};

/// Seed the store with the demo family:
///
/// - Emma (5y): Amoxicillin 250mg at 08:00 today, a pediatrician checkup in
///   three days and an MMR second dose that was due yesterday
/// - Liam (3y) and Sophia (7y) with no records yet
/// - Two Seattle hospitals, both favorites
pub fn load_sample_data<S>(storage: &S, now: NaiveDateTime) -> Result<()>
where
    S: ChildStorage + HospitalStorage,
{
    let today = now.date();

    let mut emma = Child::new("Emma", years_ago(now, 5), ThemeColor::Blue, today)?;
    emma.medications.push(Medication::new(
        "Amoxicillin",
        "250mg",
        vec![today.and_hms_opt(8, 0, 0).unwrap_or(now)],
        "Take with food",
    )?);
    emma.appointments.push(Appointment::new(
        "Pediatrician Checkup",
        now + Duration::days(3),
        "Dr. Smith's Office",
        "Dr. Smith",
        "Annual wellness visit",
    )?);
    emma.vaccinations.push(Vaccination::new(
        "MMR Vaccine",
        now - Duration::days(30),
        now - Duration::days(1),
        "Second dose",
    )?);

    let liam = Child::new("Liam", years_ago(now, 3), ThemeColor::Green, today)?;
    let sophia = Child::new("Sophia", years_ago(now, 7), ThemeColor::Purple, today)?;

    for child in [&emma, &liam, &sophia] {
        storage
            .store_child(child)
            .with_context(|| format!("Failed to store sample child {}", child.name))?;
    }

    let hospitals = [
        Hospital::new(
            "UW Medical Center",
            "1959 NE Pacific St Main Hospital",
            "Seattle",
            "WA",
            "98195",
            0.8,
            true,
        )?,
        Hospital::new(
            "Seattle Children's Hospital",
            "4800 Sand Point Way NE",
            "Seattle",
            "WA",
            "98105",
            2.1,
            true,
        )?,
    ];

    for hospital in &hospitals {
        storage
            .store_hospital(hospital)
            .with_context(|| format!("Failed to store sample hospital {}", hospital.name))?;
    }

    info!("Loaded sample data: 3 children, {} hospitals", hospitals.len());
    Ok(())
}

fn years_ago(now: NaiveDateTime, years: u32) -> NaiveDate {
    now.date()
        .checked_sub_months(Months::new(12 * years))
        .unwrap_or(now.date())
}
