//! User Name Value Object
//!
//! Matched byte-for-byte: no trimming, case folding or normalization, so
//! names registered before this service keep resolving to the same user.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    /// Create a user name; only the empty string is rejected
    pub fn new(user_name: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.into();

        if user_name.is_empty() {
            return Err(AppError::bad_request("User name cannot be empty"));
        }

        Ok(Self(user_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
