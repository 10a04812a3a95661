use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::errors::StoreError;

/// Which tracker view owns a task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Medicine,
    Meal,
    Hydration,
    Appointment,
    Safety,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Medicine,
        Category::Meal,
        Category::Hydration,
        Category::Appointment,
        Category::Safety,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Medicine => "medicine",
            Category::Meal => "meal",
            Category::Hydration => "hydration",
            Category::Appointment => "appointment",
            Category::Safety => "safety",
        }
    }

    // Missing or unknown categories fall back to medicine.
    pub fn parse_or_default(raw: Option<&str>) -> Category {
        raw.and_then(|value| Category::ALL.into_iter().find(|c| c.as_str() == value))
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Task fields as submitted, before the store assigns `id` and `createdAt`.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub category: Category,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub is_completed: bool,
}

impl NewTask {
    /// Enforces the document schema: `userId` and `title` are required, nothing else is.
    pub fn into_task(self, id: String, created_at: DateTime<Utc>) -> Result<Task, StoreError> {
        let user_id = self
            .user_id
            .filter(|v| !v.is_empty())
            .ok_or_else(|| StoreError::Validation("userId is required".into()))?;
        let title = self
            .title
            .filter(|v| !v.is_empty())
            .ok_or_else(|| StoreError::Validation("title is required".into()))?;

        Ok(Task {
            id,
            user_id,
            title,
            category: self.category,
            time: self.time,
            notes: self.notes,
            is_completed: self.is_completed,
            created_at,
        })
    }
}
