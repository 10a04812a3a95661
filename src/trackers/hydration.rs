use chrono::{DateTime, FixedOffset, Utc};
use crate::models::{Category, Task, TaskDetails};
use super::{created_today, of_category};

pub const DAILY_GLASS_GOAL: usize = 8;
pub const GLASS_LIMIT: usize = DAILY_GLASS_GOAL + 4;
pub const GLASS_TITLE: &str = "Glass of Water";

/// Glasses logged today, oldest first. Each glass is its own completed task.
#[derive(Debug, Clone, Default)]
pub struct HydrationDay {
    pub glasses: Vec<Task>,
}

pub fn hydration_today(tasks: &[Task], now: &DateTime<FixedOffset>) -> HydrationDay {
    HydrationDay {
        glasses: of_category(tasks, Category::Hydration)
            .filter(|task| created_today(task, now))
            .cloned()
            .collect(),
    }
}

impl HydrationDay {
    pub fn count(&self) -> usize {
        self.glasses.len()
    }

    pub fn completed(&self) -> usize {
        self.glasses.iter().filter(|task| task.is_completed).count()
    }

    /// Share of the daily goal met by completed glasses, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        (self.completed() as f64 / DAILY_GLASS_GOAL as f64 * 100.0).min(100.0)
    }

    /// Details for the next glass, or `None` once the daily limit is reached.
    pub fn next_glass(&self, now: DateTime<Utc>) -> Option<TaskDetails> {
        (self.count() < GLASS_LIMIT).then_some(TaskDetails::Hydration { logged_at: Some(now) })
    }

    /// The glass "remove" deletes.
    pub fn last_glass(&self) -> Option<&Task> {
        self.glasses.last()
    }
}
