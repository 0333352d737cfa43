//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use platform::password::PasswordService;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterOutput, RegisterUseCase,
};
use crate::domain::repository::{UniqueField, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthenticateRequest, ConflictResponse, RegisterRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub passwords: Arc<PasswordService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Authenticate
// ============================================================================

/// POST /api/auth
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Bytes, BytesRejection>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req: AuthenticateRequest = decode(&body?)?;

    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.passwords.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(AuthenticateInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/user
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Bytes, BytesRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req: RegisterRequest = decode(&body?)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.passwords.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            user_name: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    match output {
        RegisterOutput::Registered(user) => Ok(Json(UserResponse::from(user)).into_response()),
        // Existing clients read the conflict from the body, not the HTTP status
        RegisterOutput::Conflict(field) => Ok((
            StatusCode::OK,
            Json(ConflictResponse {
                message: conflict_message(field).to_string(),
                status: ErrorKind::Conflict.status_code(),
            }),
        )
            .into_response()),
    }
}

// ============================================================================
// Existing user (not implemented)
// ============================================================================

/// GET|POST /api/user/{id}
pub async fn user_detail(
    path: Result<Path<i64>, PathRejection>,
) -> AuthResult<Json<UserResponse>> {
    let Path(user_id) = path?;

    if user_id == 0 {
        return Err(AuthError::InvalidRequest);
    }

    Err(AuthError::NotImplemented)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a JSON body whatever Content-Type the client sent
fn decode<T: DeserializeOwned>(body: &[u8]) -> AuthResult<T> {
    Ok(serde_json::from_slice(body)?)
}

fn conflict_message(field: UniqueField) -> &'static str {
    match field {
        UniqueField::UserName => "A user with this username already exists",
        UniqueField::Email => "A user with this email already exists",
    }
}
