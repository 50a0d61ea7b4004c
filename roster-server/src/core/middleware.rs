//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log every request with method, path, status, and latency
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let user = req
        .extensions()
        .get::<crate::auth::CurrentUser>()
        .map(|u| u.username.clone());

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, path, status, latency_ms, user = user.as_deref(), "Request failed");
    } else {
        info!(%method, path, status, latency_ms, user = user.as_deref(), "Request");
    }

    response
}
