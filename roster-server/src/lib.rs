//! Roster Server - employee records REST API
//!
//! # Architecture overview
//!
//! - **Record store** (`db::store`): whole-document JSON persistence
//! - **Repositories** (`db::repository`): typed CRUD with uniqueness,
//!   search, and pagination
//! - **Auth** (`auth`): JWT + Argon2 authentication and the role gate
//! - **HTTP API** (`api`): RESTful endpoints over axum
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── auth/          # JWT service, auth service, access-control gate
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # record store, models, repositories
//! └── utils/         # errors, responses, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use crate::auth::{AuthService, CurrentUser, JwtConfig, JwtService};
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult};

// Re-export logger init
pub use crate::utils::logger::init_logger;

// Security logging macro - tracing with a dedicated target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
