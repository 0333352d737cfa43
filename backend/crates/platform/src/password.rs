//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Tunable cost factors (defaults are the `argon2` crate's recommended values)
//! - Zeroization of clear-text passwords
//! - Verification that tells a wrong password apart from a broken hash
//! - Async wrappers that move the CPU-bound work off the request threads
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so verification always uses the parameters a hash was created with.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

/// Password input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is an empty string
    #[error("Password cannot be empty")]
    Empty,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Cost factors rejected by Argon2
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Password verification outcome when it is not a match
#[derive(Debug, Error)]
pub enum PasswordVerifyError {
    /// The password does not match the hash
    #[error("Password does not match")]
    Mismatch,

    /// The hash could not be checked at all (corrupt hash, algorithm failure)
    #[error("Password verification failed: {0}")]
    Failed(String),
}

// ============================================================================
// Parameters
// ============================================================================

/// Argon2id cost factors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password taken from a request body
    ///
    /// The bytes are hashed exactly as received, so hashes written by any other
    /// Argon2 implementation keep verifying.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store, never returned)
// ============================================================================

/// Hashed password in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash loaded from the store
    ///
    /// Not validated here: a corrupt hash surfaces as
    /// [`PasswordVerifyError::Failed`] when it is used.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Password Service
// ============================================================================

/// Argon2id hasher/verifier configured with fixed cost factors
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Build a service, rejecting cost factors Argon2 does not accept
    pub fn new(params: Argon2Params) -> Result<Self, PasswordHashError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh 128-bit salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Verify a password against a stored hash
    ///
    /// Argon2 compares in constant time internally.
    pub fn verify(
        &self,
        hashed: &HashedPassword,
        password: &ClearTextPassword,
    ) -> Result<(), PasswordVerifyError> {
        let parsed = PasswordHash::new(&hashed.hash)
            .map_err(|e| PasswordVerifyError::Failed(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(PasswordVerifyError::Mismatch),
            Err(e) => Err(PasswordVerifyError::Failed(e.to_string())),
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(
        &self,
        password: ClearTextPassword,
    ) -> Result<HashedPassword, PasswordHashError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        hashed: HashedPassword,
        password: ClearTextPassword,
    ) -> Result<(), PasswordVerifyError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.verify(&hashed, &password))
            .await
            .map_err(|e| PasswordVerifyError::Failed(e.to_string()))?
    }
}

impl fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordService")
            .field("algorithm", &"argon2id")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
