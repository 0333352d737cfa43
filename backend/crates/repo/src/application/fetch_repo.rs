//! Fetch Repo Use Case
//!
//! Confirms a repository exists. No repository fields are stored yet, so the
//! id is all there is to return.

use std::sync::Arc;

use platform::deadline::within;

use crate::application::config::RepoConfig;
use crate::domain::repository::RepoRepository;
use crate::domain::value_objects::RepoId;
use crate::error::{RepoError, RepoResult};

/// Fetch repo use case
pub struct FetchRepoUseCase<R>
where
    R: RepoRepository,
{
    repo_store: Arc<R>,
    config: Arc<RepoConfig>,
}

impl<R> FetchRepoUseCase<R>
where
    R: RepoRepository,
{
    pub fn new(repo_store: Arc<R>, config: Arc<RepoConfig>) -> Self {
        Self { repo_store, config }
    }

    pub async fn execute(&self, raw_id: i64) -> RepoResult<RepoId> {
        let repo_id = RepoId::new(raw_id).ok_or(RepoError::InvalidRequest)?;

        let exists = within(
            "repo lookup",
            self.config.operation_timeout,
            self.repo_store.exists(repo_id),
        )
        .await??;

        if !exists {
            return Err(RepoError::NotFound);
        }

        Ok(repo_id)
    }
}
