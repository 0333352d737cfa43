//! Repo Error Types
//!
//! This module provides repo-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::PathRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::deadline::DeadlineExceeded;
use thiserror::Error;

/// Repo-specific result type alias
pub type RepoResult<T> = Result<T, RepoError>;

/// Repo-specific error variants
#[derive(Debug, Error)]
pub enum RepoError {
    /// Zero path id
    #[error("Bad request")]
    InvalidRequest,

    /// Fetched repository does not exist, or the path id is not an integer
    #[error("Resource not found")]
    NotFound,

    /// Repository to modify does not exist
    #[error("Repository doesn't exist")]
    Missing,

    /// Endpoint exists but has no behavior yet
    #[error("Not implemented yet")]
    NotImplemented,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Store call exceeded its deadline
    #[error("Timed out: {0}")]
    Timeout(#[from] DeadlineExceeded),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepoError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepoError::InvalidRequest => ErrorKind::BadRequest,
            RepoError::NotFound => ErrorKind::NotFound,
            RepoError::Missing => ErrorKind::Forbidden,
            RepoError::NotImplemented => ErrorKind::NotImplemented,
            RepoError::Database(_) | RepoError::Timeout(_) | RepoError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message safe to show to the client
    pub fn client_message(&self) -> String {
        match self {
            RepoError::Timeout(_) => "Request timed out".to_string(),
            RepoError::Database(_) | RepoError::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RepoError::Database(e) => {
                tracing::error!(error = %e, "Repo database error");
            }
            RepoError::Timeout(e) => {
                tracing::error!(error = %e, "Repo operation timed out");
            }
            RepoError::Internal(msg) => {
                tracing::error!(message = %msg, "Repo internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Repo error");
            }
        }
    }
}

impl IntoResponse for RepoError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<PathRejection> for RepoError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!(error = %err, "Rejected request path");
        match AppError::from(err).kind() {
            ErrorKind::NotFound => RepoError::NotFound,
            kind => RepoError::Internal(format!("Unexpected path rejection: {kind}")),
        }
    }
}
