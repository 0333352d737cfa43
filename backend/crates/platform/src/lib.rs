//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Process settings loaded once at startup
//! - Password hashing (Argon2id, tunable cost factors)
//! - Opaque token generation from the OS CSPRNG
//! - Deadlines for store and hashing calls

pub mod config;
pub mod crypto;
pub mod deadline;
pub mod password;
