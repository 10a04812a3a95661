use chrono::{DateTime, Utc};
use crate::models::{Appointment, Category, Task, TaskDetails};
use super::of_category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentEntry {
    pub id: String,
    pub title: String,
    pub appointment: Appointment,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentSchedule {
    pub upcoming: Vec<AppointmentEntry>,
    pub past: Vec<AppointmentEntry>,
}

/// Appointments sorted by scheduled time. Undated ones count as upcoming and sort last.
pub fn appointments(tasks: &[Task], now: DateTime<Utc>) -> AppointmentSchedule {
    let mut entries: Vec<AppointmentEntry> = of_category(tasks, Category::Appointment)
        .filter_map(|task| match task.details() {
            TaskDetails::Appointment(appointment) => Some(AppointmentEntry {
                id: task.id.clone(),
                title: task.title.clone(),
                appointment,
            }),
            _ => None,
        })
        .collect();

    entries.sort_by_key(|entry| (entry.appointment.at.is_none(), entry.appointment.at));

    let (past, upcoming): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.appointment.at.is_some_and(|at| at < now));

    AppointmentSchedule { upcoming, past }
}
