//! Authenticate Use Case
//!
//! Checks a user name + password pair and returns the user's stored token.
//! Read-only: the token is never rotated here.

use std::sync::Arc;

use platform::deadline::within;
use platform::password::{ClearTextPassword, PasswordService, PasswordVerifyError};

use crate::application::UserOutput;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub user_name: String,
    pub password: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    passwords: Arc<PasswordService>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, passwords: Arc<PasswordService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            passwords,
            config,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<UserOutput> {
        // Validate before touching the store
        let user_name = UserName::new(input.user_name)?;
        let password = ClearTextPassword::new(input.password)?;

        let timeout = self.config.operation_timeout;

        // Unknown user and wrong password must look the same to the caller
        let user = within(
            "user lookup",
            timeout,
            self.user_repo.find_by_user_name(&user_name),
        )
        .await??
        .ok_or(AuthError::InvalidCredentials)?;

        within(
            "password verification",
            timeout,
            self.passwords
                .verify_blocking(user.password_hash.clone(), password),
        )
        .await?
        .map_err(|e| match e {
            PasswordVerifyError::Mismatch => AuthError::InvalidCredentials,
            PasswordVerifyError::Failed(msg) => AuthError::VerificationFailed(msg),
        })?;

        tracing::info!(user_id = %user.user_id, "User authenticated");

        Ok(user.into())
    }
}
