//! API Routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - authentication endpoints
//! - [`employees`] - employee management endpoints
//!
//! Plus the `/api` index and the JSON 404 fallback.

pub mod auth;
pub mod employees;
pub mod health;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

/// API index router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api", get(index))
}

/// Endpoint map for API discovery
async fn index() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Employee Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "login": "POST /api/auth/login",
                "register": "POST /api/auth/register",
                "profile": "GET /api/auth/me",
                "logout": "POST /api/auth/logout"
            },
            "employees": {
                "getAll": "GET /api/employees",
                "getById": "GET /api/employees/{id}",
                "create": "POST /api/employees (Admin)",
                "update": "PUT /api/employees/{id} (Admin)",
                "delete": "DELETE /api/employees/{id} (Admin)",
                "checkUsername": "GET /api/employees/check/username (Admin)",
                "checkEmail": "GET /api/employees/check/email (Admin)",
                "stats": "GET /api/employees/stats (Admin)"
            }
        }
    }))
}

/// JSON 404 for unknown routes
pub async fn fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found"
        })),
    )
}
