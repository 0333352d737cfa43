//! Register Use Case
//!
//! Creates a new user account and issues its token.

use std::sync::Arc;

use platform::deadline::within;
use platform::password::{ClearTextPassword, PasswordService};

use crate::application::UserOutput;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::{InsertOutcome, UniqueField, UserRepository};
use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutput {
    /// The user was created
    Registered(UserOutput),
    /// The user name or email is already taken; nothing was written
    Conflict(UniqueField),
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    passwords: Arc<PasswordService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate everything before touching the store
        let user_name = UserName::new(input.user_name)?;
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::new(input.password)?;

        let timeout = self.config.operation_timeout;

        // Check user name first, then email
        if within(
            "user name check",
            timeout,
            self.user_repo.exists_by_user_name(&user_name),
        )
        .await??
        {
            return Ok(RegisterOutput::Conflict(UniqueField::UserName));
        }

        if within(
            "email check",
            timeout,
            self.user_repo.exists_by_email(&email),
        )
        .await??
        {
            return Ok(RegisterOutput::Conflict(UniqueField::Email));
        }

        let password_hash = within(
            "password hashing",
            timeout,
            self.passwords.hash_blocking(password),
        )
        .await?
        .map_err(|e| AuthError::HashingFailed(e.to_string()))?;

        let token = SessionToken::generate(self.config.token_length);
        let new_user = NewUser::new(user_name, email, password_hash, token);

        // The unique indexes catch a registration that raced past the checks
        match within("user insert", timeout, self.user_repo.insert(&new_user)).await?? {
            InsertOutcome::Inserted(user_id) => {
                tracing::info!(
                    user_id = %user_id,
                    user_name = %new_user.user_name,
                    "User registered"
                );
                Ok(RegisterOutput::Registered(new_user.into_user(user_id).into()))
            }
            InsertOutcome::Duplicate(field) => {
                tracing::info!(field = ?field, "Registration lost a uniqueness race");
                Ok(RegisterOutput::Conflict(field))
            }
        }
    }
}
