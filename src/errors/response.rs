use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use crate::errors::AppError;

// Existing clients read `error` from register/task-create/store failures and
// `message` from login/complete/delete failures, so both keys stay in use.
impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Registration(_)
            | AppError::EmailTaken
            | AppError::MissingCredentials
            | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,

            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::TaskNotFound => StatusCode::NOT_FOUND,

            AppError::Store(_) | AppError::Hash(_) | AppError::HashTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body_key(&self) -> &'static str {
        match self {
            AppError::MissingCredentials
            | AppError::InvalidCredentials
            | AppError::TaskNotFound => "message",
            _ => "error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let mut body = Map::new();
        body.insert(self.body_key().to_string(), Value::String(self.to_string()));
        (status, Json(Value::Object(body))).into_response()
    }
}

// Unparseable JSON is a client input error like any other missing field.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}
