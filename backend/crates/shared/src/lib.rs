//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - The error taxonomy shared by every endpoint and its HTTP rendering
//! - Store-assigned identifier wrappers
//!
//! Only things with a consistent meaning across the `auth` and `repo`
//! crates belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
