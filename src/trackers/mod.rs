//! Tracker views derived from a user's full task list.
//!
//! Each view filters the unfiltered `GET /api/tasks/:userId` result by
//! category and, for the daily trackers, by the calendar day of `createdAt`.
//! "Today" is the caller's day: every function takes the current time with
//! the caller's UTC offset.

mod appointment;
mod hydration;
mod meal;
mod medicine;
mod safety;
mod summary;

pub use appointment::{appointments, AppointmentEntry, AppointmentSchedule};
pub use hydration::{hydration_today, HydrationDay, DAILY_GLASS_GOAL, GLASS_LIMIT, GLASS_TITLE};
pub use meal::{meals_today, MealEntry, MealSlot};
pub use medicine::{medicines, MedicineEntry};
pub use safety::{safety_status, SafetyStatus, CHECK_IN_TITLE, MISSED_CHECK_IN_HOURS};
pub use summary::{summary, DailySummary};

use chrono::{DateTime, FixedOffset};
use crate::models::{Category, Task};

fn created_today(task: &Task, now: &DateTime<FixedOffset>) -> bool {
    task.created_at.with_timezone(now.offset()).date_naive() == now.date_naive()
}

fn of_category(tasks: &[Task], category: Category) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| task.category == category)
}
