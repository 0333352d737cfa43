//! API DTOs (Data Transfer Objects)
//!
//! Request bodies reject unknown fields; a missing or mistyped field fails
//! decoding and is answered with 400.

use serde::{Deserialize, Serialize};

use crate::application::UserOutput;

// ============================================================================
// Authenticate
// ============================================================================

/// POST /api/auth request
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthenticateRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/user request
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration refused because the user name or email is taken
///
/// Sent with HTTP 200; `status` carries 409.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictResponse {
    pub message: String,
    pub status: u16,
}

// ============================================================================
// User
// ============================================================================

/// User as returned by authentication and registration
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl From<UserOutput> for UserResponse {
    fn from(output: UserOutput) -> Self {
        Self {
            id: output.user_id,
            username: output.user_name,
            email: output.email,
            token: output.token,
        }
    }
}
