//! MongoDB Repository Implementation

use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};

use crate::domain::repository::RepoRepository;
use crate::domain::value_objects::RepoId;
use crate::error::RepoResult;

/// Collection holding repository documents
pub const REPOS_COLLECTION: &str = "repos";

/// MongoDB-backed repo store
///
/// Documents have no schema beyond an integer `_id`.
#[derive(Clone)]
pub struct MongoRepoStore {
    repos: Collection<Document>,
}

impl MongoRepoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            repos: db.collection(REPOS_COLLECTION),
        }
    }
}

impl RepoRepository for MongoRepoStore {
    async fn exists(&self, repo_id: RepoId) -> RepoResult<bool> {
        let found = self.repos.find_one(id_filter(repo_id)).await?;
        Ok(found.is_some())
    }
}

fn id_filter(repo_id: RepoId) -> Document {
    doc! { "_id": repo_id.value() }
}
