//! User Entity
//!
//! A registered account. Sensitive fields are wrapped in types whose
//! `Debug` output is redacted, so a `User` is safe to log.

use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_name::UserName,
};

/// User entity as persisted
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Unique user name, matched exactly on login
    pub user_name: UserName,
    /// Unique email address
    pub email: Email,
    /// Argon2 PHC hash, never returned to callers
    pub password_hash: HashedPassword,
    /// Bearer token issued at registration
    pub token: SessionToken,
}

/// A user that has not been persisted yet (no identifier)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub token: SessionToken,
}

impl NewUser {
    pub fn new(
        user_name: UserName,
        email: Email,
        password_hash: HashedPassword,
        token: SessionToken,
    ) -> Self {
        Self {
            user_name,
            email,
            password_hash,
            token,
        }
    }

    /// Attach the identifier the store assigned on insert
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            user_name: self.user_name,
            email: self.email,
            password_hash: self.password_hash,
            token: self.token,
        }
    }
}
