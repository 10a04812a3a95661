use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use crate::errors::{StoreError, StoreResult};
use crate::models::{NewTask, NewUser, Task, User};
use super::Store;

#[derive(Default)]
struct Documents {
    users: HashMap<String, User>,
    emails: HashMap<String, String>,
    tasks: Vec<Task>,  // insertion order
}

/// In-process store with the same semantics as [`super::RedisStore`].
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.documents.read().await.users.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn find_user(&self, user_id: &str) -> StoreResult<Option<User>> {
        Ok(self.documents.read().await.users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let documents = self.documents.read().await;
        Ok(documents
            .emails
            .get(email)
            .and_then(|user_id| documents.users.get(user_id))
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut documents = self.documents.write().await;
        if documents.emails.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let user = user.with_id(uuid::Uuid::new_v4().to_string());
        documents.emails.insert(user.email.clone(), user.id.clone());
        documents.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn create_task(&self, task: NewTask) -> StoreResult<Task> {
        let task = task.into_task(uuid::Uuid::new_v4().to_string(), Utc::now())?;
        self.documents.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn tasks_for_user(&self, user_id: &str) -> StoreResult<Vec<Task>> {
        Ok(self
            .documents
            .read()
            .await
            .tasks
            .iter()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn complete_task(&self, task_id: &str) -> StoreResult<Option<Task>> {
        let mut documents = self.documents.write().await;
        Ok(documents
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .map(|task| {
                task.is_completed = true;
                task.clone()
            }))
    }

    async fn delete_task(&self, task_id: &str) -> StoreResult<Option<Task>> {
        let mut documents = self.documents.write().await;
        let position = documents.tasks.iter().position(|task| task.id == task_id);
        Ok(position.map(|index| documents.tasks.remove(index)))
    }
}
