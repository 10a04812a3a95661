// Request-level error type plus the narrower errors raised by the store and mail layers.
use thiserror::Error;

pub mod mail;
pub mod response;
pub mod store;

pub use mail::MailError;
pub use store::{StoreError, StoreResult};

use crate::validation::RegistrationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Malformed request body: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Store(StoreError),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

// A duplicate hit on the store's e-mail index is the same client error as the pre-check.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => AppError::EmailTaken,
            other => AppError::Store(other),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
