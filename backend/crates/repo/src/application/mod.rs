//! Application Layer
//!
//! Use cases for the repo endpoints.

pub mod config;
pub mod fetch_repo;
pub mod modify_repo;

pub use fetch_repo::FetchRepoUseCase;
pub use modify_repo::{ModifyRepoUseCase, RepoChange};
