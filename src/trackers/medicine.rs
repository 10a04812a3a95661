use crate::models::{Category, Task, TaskDetails};
use super::of_category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineEntry {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub time: String,
    pub taken: bool,
}

// Medicines are not filtered by day: a schedule stays until it is deleted.
pub fn medicines(tasks: &[Task]) -> Vec<MedicineEntry> {
    of_category(tasks, Category::Medicine)
        .map(|task| {
            let (dosage, time) = match task.details() {
                TaskDetails::Medicine { dosage, time } => (dosage, time),
                _ => (None, None),
            };
            MedicineEntry {
                id: task.id.clone(),
                name: task.title.clone(),
                dosage: dosage.unwrap_or_default(),
                time: time.unwrap_or_default(),
                taken: task.is_completed,
            }
        })
        .collect()
}
