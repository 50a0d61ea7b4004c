//! Authentication Routes

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_auth;
use crate::core::ServerState;

/// Authentication router
///
/// - `/api/auth/login`, `/api/auth/register`: public
/// - `/api/auth/me`, `/api/auth/logout`: bearer token required
pub fn router(state: &ServerState) -> Router<ServerState> {
    let public = Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register));

    let protected = Router::new()
        .route("/me", get(handler::me))
        .route("/logout", post(handler::logout))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new().nest("/api/auth", public.merge(protected))
}
