use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::services::command_service::CommandError;

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for a 403 Forbidden
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

/// Map command-boundary failures onto the 4xx band. Every variant keeps
/// the request-scoped failure semantics: nothing here is retried and
/// nothing crashes the process.
impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Disallowed(_) => AppError::forbidden(err.to_string()),
            CommandError::TimedOut(_) => AppError::new(StatusCode::REQUEST_TIMEOUT, err.to_string()),
            CommandError::Failed(_) => {
                AppError::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            // Spawn failures surface without internal detail.
            CommandError::Io(_) => {
                AppError::new(StatusCode::UNPROCESSABLE_ENTITY, "command could not be run")
            }
            CommandError::Empty
            | CommandError::UnterminatedQuote
            | CommandError::DeniedCharacter(_) => AppError::bad_request(err.to_string()),
        }
    }
}
