//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::config::RepoConfig;
use crate::application::{FetchRepoUseCase, ModifyRepoUseCase, RepoChange};
use crate::domain::repository::RepoRepository;
use crate::error::{RepoError, RepoResult};
use crate::presentation::dto::MessageResponse;

/// Shared state for repo handlers
#[derive(Clone)]
pub struct RepoAppState<R>
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    pub repo_store: Arc<R>,
    pub config: Arc<RepoConfig>,
}

/// POST /api/repo
pub async fn create_repo() -> RepoResult<Json<MessageResponse>> {
    Err(RepoError::NotImplemented)
}

/// GET /api/repo/{id}
pub async fn fetch_repo<R>(
    State(state): State<RepoAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> RepoResult<Json<MessageResponse>>
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    let Path(raw_id) = path?;

    let use_case = FetchRepoUseCase::new(state.repo_store.clone(), state.config.clone());
    let repo_id = use_case.execute(raw_id).await?;

    Ok(Json(MessageResponse {
        message: format!("You've requested repository ID {repo_id}"),
    }))
}

/// POST /api/repo/{id}
pub async fn update_repo<R>(
    state: State<RepoAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> RepoResult<Json<MessageResponse>>
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    modify(state, path, RepoChange::Update).await
}

/// DELETE /api/repo/{id}
pub async fn delete_repo<R>(
    state: State<RepoAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> RepoResult<Json<MessageResponse>>
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    modify(state, path, RepoChange::Delete).await
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn modify<R>(
    State(state): State<RepoAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    change: RepoChange,
) -> RepoResult<Json<MessageResponse>>
where
    R: RepoRepository + Clone + Send + Sync + 'static,
{
    let Path(raw_id) = path?;

    let use_case = ModifyRepoUseCase::new(state.repo_store.clone(), state.config.clone());
    use_case.execute(raw_id, change).await?;

    Err(RepoError::NotImplemented)
}
