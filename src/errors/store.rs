use thiserror::Error;
use redis::RedisError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("Corrupt document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Task validation failed: {0}")]
    Validation(String),

    #[error("Email {0} is already registered")]
    DuplicateEmail(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
