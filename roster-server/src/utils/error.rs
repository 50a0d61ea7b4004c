//! Unified error handling
//!
//! Application-level error enum plus the HTTP error envelope:
//!
//! ```json
//! { "success": false, "message": "...", "errors": ["..."] }
//! ```
//!
//! Every failure surfaced to a client goes through [`AppError`]'s
//! `IntoResponse` impl, so status codes and message shapes stay stable.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::auth::JwtError;
use crate::db::repository::RepoError;

/// Application error enum
///
/// | category | variants |
/// |----------|----------|
/// | Authentication | `Unauthorized`, `TokenExpired`, `InvalidToken`, `InvalidCredentials` |
/// | Authorization | `Forbidden` |
/// | Business | `NotFound`, `Conflict`, `Validation` |
/// | System | `Internal` |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (401) ==========
    #[error("No token provided")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // ========== Authorization errors (403) ==========
    #[error("Insufficient permissions")]
    Forbidden,

    // ========== Business logic errors (4xx) ==========
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Validation Error")]
    Validation(Vec<String>),

    // ========== System errors (500) ==========
    #[error("Internal Server Error")]
    Internal(String),
}

/// Error response envelope
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    /// Diagnostic detail, present only in debug builds
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors, detail) = match self {
            AppError::Unauthorized
            | AppError::TokenExpired
            | AppError::InvalidToken
            | AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, None, None),

            AppError::Forbidden => (StatusCode::FORBIDDEN, None, None),

            AppError::NotFound(_) => (StatusCode::NOT_FOUND, None, None),

            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, None, None),

            AppError::Validation(ref errors) => {
                (StatusCode::BAD_REQUEST, Some(errors.clone()), None)
            }

            AppError::Internal(ref detail) => {
                error!(target: "internal", error = %detail, "Internal server error");
                let detail = cfg!(debug_assertions).then(|| detail.clone());
                (StatusCode::INTERNAL_SERVER_ERROR, None, detail)
            }
        };

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
            errors,
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Storage(msg) => AppError::Internal(msg),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::ExpiredToken => AppError::TokenExpired,
            JwtError::InvalidToken(_) | JwtError::InvalidSignature => AppError::InvalidToken,
            JwtError::GenerationFailed(msg)
            | JwtError::KeyGenerationFailed(msg)
            | JwtError::ConfigError(msg) => AppError::Internal(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
