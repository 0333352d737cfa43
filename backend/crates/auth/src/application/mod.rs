//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};

use crate::domain::entity::user::User;

/// Fields returned to the caller for an authenticated or new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOutput {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub token: String,
}

impl From<User> for UserOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.into_string(),
            user_name: user.user_name.into_inner(),
            email: user.email.into_inner(),
            token: user.token.into_inner(),
        }
    }
}
