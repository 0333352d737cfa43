//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod mongo;

pub use mongo::MongoUserStore;
