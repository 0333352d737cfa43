//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::password::PasswordService;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::mongo::MongoUserStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the MongoDB user store
pub fn auth_router(
    store: MongoUserStore,
    passwords: PasswordService,
    config: AuthConfig,
) -> Router {
    auth_router_generic(store, passwords, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, passwords: PasswordService, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        passwords: Arc::new(passwords),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth", post(handlers::authenticate::<R>))
        .route("/user", post(handlers::register::<R>))
        .route(
            "/user/{id}",
            get(handlers::user_detail).post(handlers::user_detail),
        )
        .with_state(state)
}
