//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::RepoAppState;
pub use router::{repo_router, repo_router_generic};
