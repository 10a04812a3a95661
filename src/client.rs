//! Typed HTTP client for the LifeTrack API, used by tracker front-ends and tests.
//!
//! Every call returns either the parsed payload or a [`ClientError`] carrying a
//! readable message. The message is taken from the server's `error` field, then
//! its `message` field, then a per-call fallback.

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use crate::models::{
    CompleteTaskResponse, CreateTaskForm, LoginForm, LoginResponse, MessageResponse,
    RegisterForm, RegisterResponse, Task, TaskDetails,
};
use crate::validation::{check_registration, RegistrationError};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Invalid(#[from] RegistrationError),

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:5001/api`.
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.as_ref()).map_err(|e| ClientError::BaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    // Each segment is percent-encoded, so ids cannot escape their path slot.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Runs the same registration checks as the server before sending anything.
    pub async fn register(&self, form: &RegisterForm) -> ClientResult<RegisterResponse> {
        check_registration(form)?;
        let response = self.http.post(self.url(&["register"])?).json(form).send().await?;
        parse(response, "Registration failed").await
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let form = LoginForm {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response = self.http.post(self.url(&["login"])?).json(&form).send().await?;
        parse(response, "Login failed").await
    }

    /// An empty list means the user has no tasks; a failed fetch is an `Err`.
    pub async fn list_tasks(&self, user_id: &str) -> ClientResult<Vec<Task>> {
        let response = self.http.get(self.url(&["tasks", user_id])?).send().await?;
        parse(response, "Failed to fetch tasks").await
    }

    pub async fn create_task(&self, form: &CreateTaskForm) -> ClientResult<Task> {
        let response = self.http.post(self.url(&["tasks"])?).json(form).send().await?;
        parse(response, "Failed to create task").await
    }

    /// Creates a task whose `time`/`notes` slots are encoded from typed details.
    pub async fn create_detailed_task(
        &self,
        user_id: &str,
        title: &str,
        details: &TaskDetails,
        is_completed: bool,
    ) -> ClientResult<Task> {
        let (time, notes) = details.slots();
        let form = CreateTaskForm {
            user_id: Some(user_id.to_string()),
            title: Some(title.to_string()),
            category: Some(details.category().as_str().to_string()),
            time,
            notes,
            is_completed: Some(is_completed),
        };
        self.create_task(&form).await
    }

    pub async fn complete_task(&self, task_id: &str) -> ClientResult<CompleteTaskResponse> {
        let response = self
            .http
            .put(self.url(&["tasks", task_id])?)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        parse(response, "Failed to update task").await
    }

    pub async fn delete_task(&self, task_id: &str) -> ClientResult<MessageResponse> {
        let response = self.http.delete(self.url(&["tasks", task_id])?).send().await?;
        parse(response, "Failed to delete task").await
    }
}

async fn parse<T: DeserializeOwned>(response: Response, fallback: &str) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    let message = body
        .error
        .or(body.message)
        .unwrap_or_else(|| fallback.to_string());

    tracing::debug!("API call failed with {}: {}", status, message);
    Err(ClientError::Api { status, message })
}
