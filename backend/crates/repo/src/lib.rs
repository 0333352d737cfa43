//! Repository Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Repository identifier, store trait
//! - `application/` - Fetch and modify use cases
//! - `infra/` - MongoDB implementation of the repo store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Only existence checks are backed by the store. Creating, updating and
//! deleting repositories answer "not implemented".

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RepoConfig;
pub use error::{RepoError, RepoResult};
pub use infra::mongo::MongoRepoStore;
pub use presentation::router::{repo_router, repo_router_generic};
