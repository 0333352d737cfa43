//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::value_object::session_token::TOKEN_LENGTH;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Deadline for each store call and each hash/verify call
    pub operation_timeout: Duration,
    /// Length of tokens issued at registration
    pub token_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            operation_timeout: Duration::from_secs(10),
            token_length: TOKEN_LENGTH,
        }
    }
}

impl AuthConfig {
    /// Config with a custom operation deadline
    pub fn with_timeout(operation_timeout: Duration) -> Self {
        Self {
            operation_timeout,
            ..Self::default()
        }
    }
}
