use async_trait::async_trait;
use chrono::Utc;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use crate::errors::{StoreError, StoreResult};
use crate::models::{NewTask, NewUser, Task, User};
use super::Store;

// Key layout:
//   user:{id}            user document (JSON)
//   user_email:{email}   id of the user registered with that e-mail
//   task:{id}            task document (JSON)
//   user_tasks:{user_id} set of task ids owned by the user
fn user_key(user_id: &str) -> String {
    format!("user:{}", user_id)
}

fn email_key(email: &str) -> String {
    format!("user_email:{}", email)
}

fn task_key(task_id: &str) -> String {
    format!("task:{}", task_id)
}

fn user_tasks_key(user_id: &str) -> String {
    format!("user_tasks:{}", user_id)
}

#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Opens a multiplexed connection that reconnects on its own after failures.
    pub async fn connect(client: &Client) -> StoreResult<Self> {
        let conn = ConnectionManager::new(client.clone()).await?;
        Ok(Self { conn })
    }

    async fn load_user(conn: &mut ConnectionManager, user_id: &str) -> StoreResult<Option<User>> {
        let user_data: Option<String> = conn.get(user_key(user_id)).await?;
        Ok(user_data.map(|data| serde_json::from_str(&data)).transpose()?)
    }

    async fn load_task(conn: &mut ConnectionManager, task_id: &str) -> StoreResult<Option<Task>> {
        let task_data: Option<String> = conn.get(task_key(task_id)).await?;
        Ok(task_data.map(|data| serde_json::from_str(&data)).transpose()?)
    }
}

#[async_trait]
impl Store for RedisStore {
    fn backend_tag(&self) -> &'static str {
        "redis"
    }

    async fn find_user(&self, user_id: &str) -> StoreResult<Option<User>> {
        let mut conn = self.conn.clone();
        Self::load_user(&mut conn, user_id).await
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let mut conn = self.conn.clone();
        let user_id: Option<String> = conn.get(email_key(email)).await?;
        match user_id {
            Some(user_id) => Self::load_user(&mut conn, &user_id).await,
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let user = user.with_id(uuid::Uuid::new_v4().to_string());
        let payload = serde_json::to_string(&user)?;
        let mut conn = self.conn.clone();

        // Index claim and document land in one transaction, so the index never
        // points at a missing user.
        let (claimed,): (bool,) = redis::pipe()
            .atomic()
            .set_nx(email_key(&user.email), &user.id)
            .set(user_key(&user.id), payload).ignore()
            .query_async(&mut conn)
            .await?;

        if !claimed {
            let dropped: redis::RedisResult<()> = conn.del(user_key(&user.id)).await;
            if let Err(e) = dropped {
                tracing::warn!("Failed to drop unindexed user {}: {}", user.id, e);
            }
            return Err(StoreError::DuplicateEmail(user.email));
        }

        tracing::debug!("Stored user {}", user.id);
        Ok(user)
    }

    async fn create_task(&self, task: NewTask) -> StoreResult<Task> {
        let task = task.into_task(uuid::Uuid::new_v4().to_string(), Utc::now())?;
        let payload = serde_json::to_string(&task)?;

        let mut conn = self.conn.clone();
        let _: () = redis::pipe()
            .atomic()
            .set(task_key(&task.id), payload).ignore()
            .sadd(user_tasks_key(&task.user_id), &task.id).ignore()
            .query_async(&mut conn)
            .await?;

        tracing::debug!("Stored task {} for user {}", task.id, task.user_id);
        Ok(task)
    }

    async fn tasks_for_user(&self, user_id: &str) -> StoreResult<Vec<Task>> {
        let mut conn = self.conn.clone();
        let task_ids: Vec<String> = conn.smembers(user_tasks_key(user_id)).await?;
        if task_ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = task_ids.iter().map(|id| task_key(id)).collect();
        let documents: Vec<Option<String>> = redis::cmd("MGET").arg(&keys).query_async(&mut conn).await?;

        let mut tasks = Vec::with_capacity(documents.len());
        for (task_id, document) in task_ids.iter().zip(documents) {
            match document {
                Some(data) => tasks.push(serde_json::from_str::<Task>(&data)?),
                None => tracing::warn!("Task {} indexed for user {} but missing", task_id, user_id),
            }
        }

        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn complete_task(&self, task_id: &str) -> StoreResult<Option<Task>> {
        let mut conn = self.conn.clone();
        let Some(mut task) = Self::load_task(&mut conn, task_id).await? else {
            return Ok(None);
        };

        task.is_completed = true;
        // XX: a delete landing after the read must not bring the document back.
        let written: redis::Value = redis::cmd("SET")
            .arg(task_key(task_id))
            .arg(serde_json::to_string(&task)?)
            .arg("XX")
            .query_async(&mut conn)
            .await?;
        if matches!(written, redis::Value::Nil) {
            return Ok(None);
        }
        Ok(Some(task))
    }

    async fn delete_task(&self, task_id: &str) -> StoreResult<Option<Task>> {
        let mut conn = self.conn.clone();
        let Some(task) = Self::load_task(&mut conn, task_id).await? else {
            return Ok(None);
        };

        let (removed,): (u32,) = redis::pipe()
            .atomic()
            .del(task_key(task_id))
            .srem(user_tasks_key(&task.user_id), task_id).ignore()
            .query_async(&mut conn)
            .await?;
        // a concurrent delete already took it
        if removed == 0 {
            return Ok(None);
        }
        Ok(Some(task))
    }
}
