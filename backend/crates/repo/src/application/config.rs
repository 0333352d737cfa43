//! Application Configuration
//!
//! Configuration for the Repo application layer.

use std::time::Duration;

/// Repo application configuration
#[derive(Debug, Clone)]
pub struct RepoConfig {
    /// Deadline for each store call
    pub operation_timeout: Duration,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            operation_timeout: Duration::from_secs(10),
        }
    }
}

impl RepoConfig {
    /// Config with a custom operation deadline
    pub fn with_timeout(operation_timeout: Duration) -> Self {
        Self { operation_timeout }
    }
}
