//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Authenticate and register use cases
//! - `infra/` - MongoDB implementation of the user store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with username + email + password
//! - Authentication with username + password
//! - Opaque bearer tokens, issued once at registration
//!
//! ## Security Model
//! - Passwords hashed with Argon2id off the request threads
//! - Unknown user and wrong password produce the same response
//! - Password hashes and tokens are redacted from `Debug` output

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::mongo::MongoUserStore;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
