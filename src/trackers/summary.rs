use chrono::{DateTime, FixedOffset};
use crate::models::{Category, Task};
use super::{created_today, of_category};

/// Dashboard overview figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailySummary {
    pub medicines_taken: usize,
    pub meals_completed: usize,
    pub water_intake: usize,
    /// Gates the missed check-in alert.
    pub checked_in_today: bool,
}

// The counts cover every completed task in the list; only the check-in is per day.
pub fn summary(tasks: &[Task], now: &DateTime<FixedOffset>) -> DailySummary {
    let completed = |category| of_category(tasks, category).filter(|task| task.is_completed);

    DailySummary {
        medicines_taken: completed(Category::Medicine).count(),
        meals_completed: completed(Category::Meal).count(),
        water_intake: completed(Category::Hydration).count(),
        checked_in_today: completed(Category::Safety).any(|task| created_today(task, now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackers::fixtures::task;

    fn done(id: &str, category: Category, created_at: &str) -> Task {
        let mut t = task(id, category, id, created_at);
        t.is_completed = true;
        t
    }

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-02T10:00:00+05:30").unwrap()
    }

    #[test]
    fn counts_completed_tasks_per_category() {
        let tasks = [
            done("aspirin", Category::Medicine, "2024-03-01T02:00:00Z"),
            task("insulin", Category::Medicine, "Insulin", "2024-03-02T02:00:00Z"),
            done("breakfast", Category::Meal, "2024-03-02T02:30:00Z"),
            done("lunch", Category::Meal, "2024-03-02T03:00:00Z"),
            done("glass", Category::Hydration, "2024-03-02T03:10:00Z"),
            task("visit", Category::Appointment, "Checkup", "2024-03-02T03:20:00Z"),
        ];

        assert_eq!(
            summary(&tasks, &now()),
            DailySummary {
                medicines_taken: 1,
                meals_completed: 2,
                water_intake: 1,
                checked_in_today: false,
            }
        );
    }

    #[test]
    fn check_in_counts_only_when_completed_on_the_local_day() {
        // 2024-03-01T19:00Z is already 2 March at +05:30
        let late_utc = done("late", Category::Safety, "2024-03-01T19:00:00Z");
        assert!(summary(&[late_utc], &now()).checked_in_today);

        let yesterday = done("old", Category::Safety, "2024-03-01T10:00:00Z");
        assert!(!summary(&[yesterday], &now()).checked_in_today);

        let pending = task("pending", Category::Safety, "Safety Check-in", "2024-03-02T03:00:00Z");
        assert!(!summary(&[pending], &now()).checked_in_today);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(summary(&[], &now()), DailySummary::default());
    }
}
