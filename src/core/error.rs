//! Errors surfaced by the chat service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// One or more fields of a new message were absent or `null`.
    #[error("Missing required fields")]
    MissingFields,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must not be zero")]
    InvalidId(&'static str),

    #[error("{0} must be an integer")]
    NotAnInteger(&'static str),

    #[error("content must not be empty")]
    EmptyContent,

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ChatError {
    /// Whether the caller sent a bad request, as opposed to the server failing.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ChatError::Storage(_))
    }
}
