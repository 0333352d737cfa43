//! Infrastructure Layer

pub mod mongo;

pub use mongo::MongoRepoStore;
