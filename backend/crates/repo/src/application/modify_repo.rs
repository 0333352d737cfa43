//! Modify Repo Use Case
//!
//! Resolves the target of an update or delete. Only the existence check is
//! backed by the store; the change itself is not applied anywhere yet.

use std::sync::Arc;

use platform::deadline::within;

use crate::application::config::RepoConfig;
use crate::domain::repository::RepoRepository;
use crate::domain::value_objects::RepoId;
use crate::error::{RepoError, RepoResult};

/// Requested change to an existing repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RepoChange {
    #[display("update")]
    Update,
    #[display("delete")]
    Delete,
}

/// Modify repo use case
pub struct ModifyRepoUseCase<R>
where
    R: RepoRepository,
{
    repo_store: Arc<R>,
    config: Arc<RepoConfig>,
}

impl<R> ModifyRepoUseCase<R>
where
    R: RepoRepository,
{
    pub fn new(repo_store: Arc<R>, config: Arc<RepoConfig>) -> Self {
        Self { repo_store, config }
    }

    pub async fn execute(&self, raw_id: i64, change: RepoChange) -> RepoResult<RepoId> {
        let repo_id = RepoId::new(raw_id).ok_or(RepoError::InvalidRequest)?;

        let exists = within(
            "repo lookup",
            self.config.operation_timeout,
            self.repo_store.exists(repo_id),
        )
        .await??;

        if !exists {
            return Err(RepoError::Missing);
        }

        tracing::debug!(repo_id = %repo_id, change = %change, "Repo change requested");

        Ok(repo_id)
    }
}
