use async_trait::async_trait;
use crate::errors::StoreResult;
use crate::models::{NewTask, NewUser, Task, User};

/// Persistence for users and tasks.
///
/// Implementations assign ids and `createdAt`. Every operation touches a
/// single document plus its index entries; nothing spans users.
#[async_trait]
pub trait Store: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn find_user(&self, user_id: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Fails with `StoreError::DuplicateEmail` if the e-mail is already indexed.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    /// Fails with `StoreError::Validation` if `userId` or `title` is missing.
    async fn create_task(&self, task: NewTask) -> StoreResult<Task>;

    /// All tasks of the user regardless of category, oldest first.
    async fn tasks_for_user(&self, user_id: &str) -> StoreResult<Vec<Task>>;

    /// Sets `isCompleted` and returns the updated task, `None` if the id is unknown.
    async fn complete_task(&self, task_id: &str) -> StoreResult<Option<Task>>;

    /// Returns the removed task, `None` if the id is unknown.
    async fn delete_task(&self, task_id: &str) -> StoreResult<Option<Task>>;
}
