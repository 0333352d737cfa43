//! Repo Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::RepoConfig;
use crate::domain::repository::RepoRepository;
use crate::infra::mongo::MongoRepoStore;
use crate::presentation::handlers::{self, RepoAppState};

/// Create the Repo router with the MongoDB repo store
pub fn repo_router(store: MongoRepoStore, config: RepoConfig) -> Router {
    repo_router_generic(store, config)
}

/// Create a generic Repo router for any store implementation
pub fn repo_router_generic<R>(repo_store: R, config: RepoConfig) -> Router
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    let state = RepoAppState {
        repo_store: Arc::new(repo_store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/repo", post(handlers::create_repo))
        .route(
            "/repo/{id}",
            post(handlers::update_repo::<R>)
                .get(handlers::fetch_repo::<R>)
                .delete(handlers::delete_repo::<R>),
        )
        .with_state(state)
}
