use chrono::{DateTime, FixedOffset};
use crate::models::{Category, Task};
use super::{created_today, of_category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }

    fn matches(self, title: &str) -> bool {
        title.to_lowercase() == self.title().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEntry {
    pub slot: MealSlot,
    pub task_id: Option<String>,
    pub completed: bool,
}

/// Today's three meal slots. A later task for the same slot replaces an earlier one.
pub fn meals_today(tasks: &[Task], now: &DateTime<FixedOffset>) -> [MealEntry; 3] {
    let mut meals = MealSlot::ALL.map(|slot| MealEntry { slot, task_id: None, completed: false });

    for task in of_category(tasks, Category::Meal).filter(|task| created_today(task, now)) {
        if let Some(entry) = meals.iter_mut().find(|entry| entry.slot.matches(&task.title)) {
            entry.task_id = Some(task.id.clone());
            entry.completed = task.is_completed;
        }
    }

    meals
}
