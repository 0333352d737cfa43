//! Data Transfer Objects

use serde::Serialize;

/// Plain message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
