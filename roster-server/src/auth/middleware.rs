//! Authentication middleware
//!
//! The per-request access-control gate: requests start unauthenticated,
//! become authenticated when a valid bearer token is presented, and
//! authorized when the role check passes. Every failed transition
//! short-circuits with its own error kind.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
}

/// Authentication middleware - requires a valid token
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into request extensions.
///
/// | failure | response |
/// |---------|----------|
/// | missing or non-bearer header | 401 "No token provided" |
/// | expired token | 401 "Token expired" |
/// | tampered/garbled token | 401 "Invalid token" |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
        return Err(AppError::Unauthorized);
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(CurrentUser::from(claims));
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// Admin middleware - requires the admin role
///
/// Must run after [`require_auth`]; rejects with 403 otherwise.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id.clone(),
            username = user.username.clone(),
            user_role = user.role.to_string()
        );
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}

/// Optional authentication - never fails
///
/// A valid token injects [`CurrentUser`]; a missing or invalid one lets the
/// request proceed unauthenticated. For endpoints that adapt to identity
/// without requiring it.
pub async fn optional_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(req.headers())
        && let Ok(claims) = state.jwt.validate_token(token)
    {
        req.extensions_mut().insert(CurrentUser::from(claims));
    }

    next.run(req).await
}
