//! Typed per-category attributes.
//!
//! On the wire every task carries two free-form slots, `time` and `notes`.
//! [`TaskDetails`] is the structured view of those slots for each category;
//! [`Task::details`] decodes them and [`TaskDetails::slots`] encodes them back,
//! so the appointment sub-record format lives only in this module.

use chrono::{DateTime, Utc};
use super::task::{Category, Task};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appointment {
    pub at: Option<DateTime<Utc>>,
    pub doctor: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetails {
    Medicine { dosage: Option<String>, time: Option<String> },
    Meal { logged_at: Option<DateTime<Utc>> },
    Hydration { logged_at: Option<DateTime<Utc>> },
    Appointment(Appointment),
    Safety { checked_in_at: Option<DateTime<Utc>> },
}

impl TaskDetails {
    pub fn category(&self) -> Category {
        match self {
            TaskDetails::Medicine { .. } => Category::Medicine,
            TaskDetails::Meal { .. } => Category::Meal,
            TaskDetails::Hydration { .. } => Category::Hydration,
            TaskDetails::Appointment(_) => Category::Appointment,
            TaskDetails::Safety { .. } => Category::Safety,
        }
    }

    /// Encodes into the `(time, notes)` wire slots.
    pub fn slots(&self) -> (Option<String>, Option<String>) {
        match self {
            TaskDetails::Medicine { dosage, time } => (time.clone(), dosage.clone()),
            TaskDetails::Meal { logged_at }
            | TaskDetails::Hydration { logged_at }
            | TaskDetails::Safety { checked_in_at: logged_at } => (logged_at.map(|t| t.to_rfc3339()), None),
            TaskDetails::Appointment(appointment) => (
                appointment.at.map(|t| t.to_rfc3339()),
                Some(appointment.render_notes()),
            ),
        }
    }
}

impl Appointment {
    fn render_notes(&self) -> String {
        format!("Doctor: {} | Location: {} | Notes: {}", self.doctor, self.location, self.notes)
    }

    fn parse(at: Option<DateTime<Utc>>, raw: Option<&str>) -> Appointment {
        let mut appointment = Appointment { at, ..Default::default() };

        for part in raw.unwrap_or_default().split('|') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once(':').map(|(key, value)| (key.trim(), value.trim())) {
                Some(("Doctor", value)) => appointment.doctor = value.to_string(),
                Some(("Location", value)) => appointment.location = value.to_string(),
                Some(("Notes", value)) => appointment.notes = value.to_string(),
                // free text written without the sub-record layout
                _ => appointment.notes = part.to_string(),
            }
        }

        appointment
    }
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|t| t.with_timezone(&Utc))
}

impl Task {
    pub fn details(&self) -> TaskDetails {
        let time = self.time.as_deref();
        match self.category {
            Category::Medicine => TaskDetails::Medicine {
                dosage: self.notes.clone(),
                time: self.time.clone(),
            },
            Category::Meal => TaskDetails::Meal { logged_at: parse_timestamp(time) },
            Category::Hydration => TaskDetails::Hydration { logged_at: parse_timestamp(time) },
            Category::Appointment => {
                TaskDetails::Appointment(Appointment::parse(parse_timestamp(time), self.notes.as_deref()))
            }
            Category::Safety => TaskDetails::Safety { checked_in_at: parse_timestamp(time) },
        }
    }
}
