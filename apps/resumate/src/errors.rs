use thiserror::Error;

use crate::session::store::StorageError;
use crate::validation::ValidationError;

/// The user action an error happened during. Decides the notice wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CommitEntry,
    GenerateResume,
    FetchResumes,
    DeleteResume,
    Login,
    Register,
    FetchProfile,
}

impl Operation {
    fn validation_title(self) -> &'static str {
        match self {
            Operation::CommitEntry => "Missing Field",
            Operation::GenerateResume => "Resume Generation Failed",
            Operation::Login | Operation::Register => "Validation Error",
            Operation::FetchResumes | Operation::DeleteResume | Operation::FetchProfile => "Error",
        }
    }

    fn remote_title(self) -> &'static str {
        match self {
            Operation::Login => "Login Error",
            Operation::Register => "Register Error",
            _ => "Error",
        }
    }

    fn fallback_message(self) -> &'static str {
        match self {
            Operation::GenerateResume => "Error generating resume",
            Operation::FetchResumes => "Error fetching Resumes",
            Operation::DeleteResume => "Error deleting resume",
            Operation::FetchProfile => "Failed to fetch user data",
            Operation::CommitEntry | Operation::Login | Operation::Register => {
                "An error occurred."
            }
        }
    }
}

/// A blocking message for the user: what failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Crate-level error type. Every variant leaves the caller in a retry-capable state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("API error (status {status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Api { status: u16, message: Option<String> },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps the error to the notice shown to the user. Remote errors surface
    /// the server's message when it sent one.
    pub fn notice(&self, operation: Operation) -> Notice {
        let (title, message) = match self {
            AppError::Validation(e) => (operation.validation_title(), e.message.clone()),
            AppError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => (operation.remote_title(), message.clone()),
            AppError::Unauthenticated => (
                operation.remote_title(),
                "Please sign in to continue".to_string(),
            ),
            AppError::SubmissionInFlight => (
                operation.remote_title(),
                "Please wait for the current request to finish".to_string(),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    operation.remote_title(),
                    operation.fallback_message().to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    operation.remote_title(),
                    operation.fallback_message().to_string(),
                )
            }
            _ => (
                operation.remote_title(),
                operation.fallback_message().to_string(),
            ),
        };

        Notice {
            title: title.to_string(),
            message,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
