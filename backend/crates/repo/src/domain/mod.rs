//! Domain Layer

pub mod repository;
pub mod value_objects;

pub use repository::RepoRepository;
pub use value_objects::RepoId;
