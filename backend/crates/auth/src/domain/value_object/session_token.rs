//! Session Token Value Object
//!
//! Opaque bearer credential: a fixed-length random string over `[A-Za-z0-9]`.
//! Issued once at registration and returned on every successful login.

use std::fmt;

/// Length of newly issued tokens
pub const TOKEN_LENGTH: usize = 25;

/// Opaque session token
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issue a new token of `len` characters from the OS CSPRNG
    pub fn generate(len: usize) -> Self {
        Self(platform::crypto::random_alphanumeric(len))
    }

    /// Wrap a token loaded from the store
    pub fn from_stored(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
