//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

/// Employee router
///
/// Read routes require any authenticated user; management routes (create,
/// update, delete, availability checks, stats) require the admin role.
pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/employees", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/check/username", get(handler::check_username))
        .route("/check/email", get(handler::check_email))
        .route("/stats", get(handler::stats))
        .layer(middleware::from_fn(require_admin));

    read_routes
        .merge(manage_routes)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
