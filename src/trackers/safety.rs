use chrono::{DateTime, Duration, FixedOffset, Utc};
use crate::models::{Category, Task, TaskDetails};
use super::of_category;

pub const MISSED_CHECK_IN_HOURS: i64 = 12;
pub const CHECK_IN_TITLE: &str = "Safety Check-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyStatus {
    pub last_check_in: Option<DateTime<Utc>>,
    pub checked_in_today: bool,
}

/// Latest completed check-in, by `createdAt`.
pub fn safety_status(tasks: &[Task], now: &DateTime<FixedOffset>) -> SafetyStatus {
    let last_check_in = of_category(tasks, Category::Safety)
        .filter(|task| task.is_completed)
        .map(|task| task.created_at)
        .max();

    let checked_in_today = last_check_in
        .is_some_and(|at| at.with_timezone(now.offset()).date_naive() == now.date_naive());

    SafetyStatus { last_check_in, checked_in_today }
}

impl SafetyStatus {
    /// True once more than twelve hours passed since the last check-in and none happened today.
    pub fn check_in_missed(&self, now: DateTime<Utc>) -> bool {
        match self.last_check_in {
            Some(at) => now - at > Duration::hours(MISSED_CHECK_IN_HOURS) && !self.checked_in_today,
            None => false,
        }
    }

    pub fn check_in(now: DateTime<Utc>) -> TaskDetails {
        TaskDetails::Safety { checked_in_at: Some(now) }
    }
}
