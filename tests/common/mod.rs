#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::sync::{Mutex, Notify};
use tower::ServiceExt;
use lifetrack::{
    config::ServerConfig,
    errors::{MailError, StoreError, StoreResult},
    models::{NewTask, NewUser, Task, User},
    services::{Email, Mailer, MemoryStore, Notifier, Store},
    state::AppState,
};

pub const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
    signal: Notify,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        self.sent.lock().await.push(email.clone());
        self.signal.notify_one();
        Ok(())
    }
}

impl RecordingMailer {
    pub async fn sent(&self) -> Vec<Email> {
        self.sent.lock().await.clone()
    }

    /// Waits until at least `count` messages went out.
    pub async fn wait_for(&self, count: usize) -> Vec<Email> {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                {
                    let sent = self.sent.lock().await;
                    if sent.len() >= count {
                        return sent.clone();
                    }
                }
                self.signal.notified().await;
            }
        })
        .await
        .expect("timed out waiting for notifications")
    }
}

#[derive(Default)]
pub struct FailingMailer {
    pub attempts: AtomicUsize,
    signal: Notify,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &Email) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.signal.notify_one();
        Err(MailError::Rejected(503))
    }
}

impl FailingMailer {
    /// Waits until at least `count` deliveries were attempted.
    pub async fn wait_for_attempts(&self, count: usize) -> usize {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let attempts = self.attempts.load(Ordering::SeqCst);
                if attempts >= count {
                    return attempts;
                }
                self.signal.notified().await;
            }
        })
        .await
        .expect("timed out waiting for delivery attempts")
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

fn unreachable() -> StoreError {
    StoreError::Redis(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")))
}

#[async_trait]
impl Store for FailingStore {
    fn backend_tag(&self) -> &'static str {
        "failing"
    }

    async fn find_user(&self, _user_id: &str) -> StoreResult<Option<User>> {
        Err(unreachable())
    }

    async fn find_user_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
        Err(unreachable())
    }

    async fn create_user(&self, _user: NewUser) -> StoreResult<User> {
        Err(unreachable())
    }

    async fn create_task(&self, _task: NewTask) -> StoreResult<Task> {
        Err(unreachable())
    }

    async fn tasks_for_user(&self, _user_id: &str) -> StoreResult<Vec<Task>> {
        Err(unreachable())
    }

    async fn complete_task(&self, _task_id: &str) -> StoreResult<Option<Task>> {
        Err(unreachable())
    }

    async fn delete_task(&self, _task_id: &str) -> StoreResult<Option<Task>> {
        Err(unreachable())
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        max_body_size: 64 * 1024,
        static_dir: None,
    }
}

pub fn build_router(store: Arc<dyn Store>, mailer: Arc<dyn Mailer>) -> Router {
    build_router_with_cost(store, mailer, TEST_BCRYPT_COST)
}

pub fn build_router_with_cost(store: Arc<dyn Store>, mailer: Arc<dyn Mailer>, bcrypt_cost: u32) -> Router {
    let notifier = Notifier::new(mailer, "alerts@lifetrack.test");
    let state = AppState::new(store, notifier, bcrypt_cost).unwrap();
    lifetrack::router(state, &server_config())
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    TestApp {
        router: build_router(store.clone(), mailer.clone()),
        store,
        mailer,
    }
}

impl TestApp {
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        call(&self.router, method, uri, body).await
    }

    pub async fn register(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.call(
            Method::POST,
            "/api/register",
            Some(serde_json::json!({
                "name": "Nimal",
                "email": email,
                "password": password,
                "emergencyContact": "kin@example.com",
            })),
        )
        .await
    }

    /// Registers a user and returns its id.
    pub async fn user(&self, email: &str) -> String {
        let (status, body) = self.register(email, "secret1").await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["userId"].as_str().unwrap().to_string()
    }

    pub async fn task(&self, body: Value) -> Value {
        let (status, task) = self.call(Method::POST, "/api/tasks", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{task}");
        task
    }
}

pub async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}
