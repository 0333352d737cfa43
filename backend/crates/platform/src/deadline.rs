//! Operation Deadlines
//!
//! Bounds a single store or hashing call. There are no retries: an expired
//! deadline fails the request.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// The wrapped operation did not finish in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} did not complete within {limit:?}")]
pub struct DeadlineExceeded {
    pub operation: &'static str,
    pub limit: Duration,
}

/// Await `fut`, giving up after `limit`
pub async fn within<F, T>(
    operation: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, DeadlineExceeded>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| DeadlineExceeded { operation, limit })
}
