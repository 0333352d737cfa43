//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Field covered by a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    UserName,
    Email,
}

/// Result of inserting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Stored under the returned identifier
    Inserted(UserId),
    /// Rejected by the store's unique index on the given field
    Duplicate(UniqueField),
}

/// User repository trait
///
/// Single-document reads and writes are assumed atomic; nothing here takes
/// locks across calls.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Insert a new user
    async fn insert(&self, user: &NewUser) -> AuthResult<InsertOutcome>;
}
