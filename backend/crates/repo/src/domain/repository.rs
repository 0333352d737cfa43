//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::value_objects::RepoId;
use crate::error::RepoResult;

/// Repo store trait
#[trait_variant::make(RepoRepository: Send)]
pub trait LocalRepoRepository {
    /// Check whether a repository with this id is stored
    async fn exists(&self, repo_id: RepoId) -> RepoResult<bool>;
}
