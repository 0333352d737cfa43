//! Error conversions - From implementations and HTTP rendering
//!
//! Provides automatic conversion from extractor rejections to [`AppError`]
//! and the single JSON rendering used by every endpoint.

#[cfg(feature = "axum")]
pub use self::rendering::{fallback, method_not_allowed, panic_response};

// ============================================================================
// serde_json conversions
// ============================================================================

use super::app_error::AppError;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request("Bad request").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod rendering {
    use std::any::Any;

    use axum::Json;
    use axum::extract::OriginalUri;
    use axum::extract::rejection::{BytesRejection, PathRejection};
    use axum::http::{Method, StatusCode};
    use axum::response::{IntoResponse, Response};

    use crate::error::app_error::AppError;

    impl From<BytesRejection> for AppError {
        fn from(err: BytesRejection) -> Self {
            AppError::bad_request("Bad request").with_source(err)
        }
    }

    /// A path segment that does not parse means the route did not match
    impl From<PathRejection> for AppError {
        fn from(err: PathRejection) -> Self {
            match err {
                PathRejection::FailedToDeserializePathParams(_) => {
                    AppError::not_found("Resource not found").with_source(err)
                }
                _ => AppError::internal("Internal server error").with_source(err),
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let body = serde_json::json!({
                "error": self.message(),
                "status": self.status_code(),
            });

            (status, Json(body)).into_response()
        }
    }

    /// Router fallback for unknown routes
    pub async fn fallback() -> AppError {
        AppError::not_found("Resource not found")
    }

    /// Fallback for a known route called with the wrong method
    pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
        AppError::method_not_allowed(format!(
            "Method {method} not allowed for URL {}",
            uri.path()
        ))
    }

    /// Response for a handler that panicked (the payload is never exposed)
    pub fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
        tracing::error!("Handler panicked");
        AppError::internal("Internal server error").into_response()
    }
}
