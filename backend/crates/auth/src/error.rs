//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::deadline::DeadlineExceeded;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Body missing, unparseable, or a required field absent/empty
    #[error("Bad request")]
    InvalidRequest,

    /// Unknown user or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Stored hash could not be checked
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    /// New password could not be hashed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Path did not match the route's parameter type
    #[error("Resource not found")]
    NotFound,

    /// Endpoint exists but has no behavior yet
    #[error("Not implemented yet")]
    NotImplemented,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Store or hashing call exceeded its deadline
    #[error("Timed out: {0}")]
    Timeout(#[from] DeadlineExceeded),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidRequest => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Forbidden,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::NotImplemented => ErrorKind::NotImplemented,
            AuthError::VerificationFailed(_)
            | AuthError::HashingFailed(_)
            | AuthError::Database(_)
            | AuthError::Timeout(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message safe to show to the client
    ///
    /// Server-side variants carry details that only go to the log.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::VerificationFailed(_) => "Password verification failed".to_string(),
            AuthError::HashingFailed(_) => "Password hashing failed".to_string(),
            AuthError::Timeout(_) => "Request timed out".to_string(),
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error".to_string(),
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::VerificationFailed(msg) | AuthError::HashingFailed(msg) => {
                tracing::error!(message = %msg, "Auth password hashing error");
            }
            AuthError::Timeout(e) => {
                tracing::error!(error = %e, "Auth operation timed out");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidRequest,
            ErrorKind::NotFound => AuthError::NotFound,
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<BytesRejection> for AuthError {
    fn from(err: BytesRejection) -> Self {
        tracing::debug!(error = %err, "Unreadable request body");
        AppError::from(err).into()
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::from(err).into()
    }
}

impl From<PathRejection> for AuthError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!(error = %err, "Rejected request path");
        AppError::from(err).into()
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(_: platform::password::PasswordPolicyError) -> Self {
        AuthError::InvalidRequest
    }
}
